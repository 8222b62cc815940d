pub mod stage1_matrix;
pub mod stage2_classify;
pub mod stage3_summary;
pub mod stage4_report;
