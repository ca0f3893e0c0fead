pub mod export;
pub mod import;

pub use export::{export_csv, write_csv};
pub use import::{
    load_flow, load_grouping, load_hydrogram, load_productivity, read_flow_long, read_flow_wide,
    read_grouping, read_hydrogram, read_productivity,
};
