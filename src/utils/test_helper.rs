//! Helper functions shared by unit tests.
//!
//! **Note**: This module is only compiled and used during testing.

#[cfg(test)]
pub mod test_helper {
    use log::Level;

    pub fn check_warnings(expected_warnings: Vec<&str>) {
        testing_logger::validate(|captured_logs| {
            let warnings: Vec<_> = captured_logs
                .iter()
                .filter(|log| log.level == Level::Warn)
                .collect();
            assert_eq!(warnings.len(), expected_warnings.len());
            for (warning, expected) in warnings.iter().zip(expected_warnings.clone()) {
                assert_eq!(warning.body, expected);
            }
        });
    }
}
