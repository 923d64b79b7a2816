// Services that implement business logic

pub mod echo;
pub mod fietstest;
pub mod ecg;
pub mod holter;
pub mod cied;
pub mod brief;
pub mod study;

pub use study::{create_default_study_service, StudyService, StudyServiceError, StudyServiceTrait};

/// Format a measurement without spurious trailing zeros ("11" not "11.0",
/// but "1.5" stays "1.5").
pub(crate) fn fmt_num(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{}", value.round() as i64)
    } else {
        let formatted = format!("{:.2}", value);
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fmt_num;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(11.0), "11");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(0.42), "0.42");
        assert_eq!(fmt_num(2.50), "2.5");
    }
}
