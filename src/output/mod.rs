pub mod formatter;

pub use formatter::{
    format_appraisal_detail, format_curve_table, format_history_table, format_score,
    should_use_colors,
};
