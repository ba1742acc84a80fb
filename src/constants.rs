//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Record store location and naming
pub mod store {
    /// Environment variable overriding the data file path
    pub const DATA_FILE_ENV: &str = "NODE_HOLDER_DATA_FILE";

    /// Directory created under the platform data dir
    pub const APP_DIR_NAME: &str = "node-holder";

    /// Fallback directory when no platform data dir exists
    pub const LOCAL_DATA_DIR: &str = "data";

    /// File name of the record document
    pub const DATA_FILE_NAME: &str = "global_list_data.json";

    /// Indentation of the pretty-printed document
    pub const INDENT: &[u8] = b"    ";
}

/// Catalog defaults
pub mod catalog {
    /// Name given to freshly captured records
    pub const NEW_RECORD_NAME: &str = "Nodes";
}

/// Node system constants
pub mod node {
    /// Width given to nodes whose type does not specify one
    pub const DEFAULT_WIDTH: f32 = 140.0;
}

/// Color ramp limits
pub mod ramp {
    pub const MAX_ELEMENTS: usize = 32;
    pub const MIN_ELEMENTS: usize = 1;

    pub const COLOR_MODES: &[&str] = &["RGB", "HSV", "HSL"];
    pub const INTERPOLATIONS: &[&str] = &["EASE", "CARDINAL", "LINEAR", "B_SPLINE", "CONSTANT"];

    /// Position of stops appended while growing a ramp to a saved size
    pub const APPEND_POSITION: f32 = 1.0;
}

/// Curve mapping limits
pub mod curve {
    pub const MIN_POINTS: usize = 2;

    pub const HANDLE_TYPES: &[&str] = &["AUTO", "AUTO_CLAMPED", "VECTOR"];

    /// Number of intervals in a baked lookup table
    pub const TABLE_SIZE: usize = 256;

    /// Location of points appended while growing a curve to a saved size
    pub const APPEND_LOCATION: [f32; 2] = [0.0, 0.0];
}
