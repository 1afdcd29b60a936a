mod summary;

pub use summary::{
    expected_angle_sum, info_text, AngleSummary, OppositeAngles, PLACEHOLDER,
};
