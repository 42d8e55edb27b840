use std::time::Instant;

/// Runs `operation` once and returns the elapsed seconds alongside its output.
///
/// Uses `Instant`, so wall-clock adjustments do not affect the measurement.
pub fn measure<F, O>(operation: F) -> (f64, O)
where
    F: FnOnce() -> O,
{
    let start = Instant::now();
    let output = operation();
    let end = Instant::now();
    (end.saturating_duration_since(start).as_secs_f64(), output)
}

#[cfg(test)]
mod tests {
    use super::measure;
    use std::time::Duration;

    #[test]
    fn returns_operation_output() {
        let (elapsed, output) = measure(|| 2 + 2);
        assert_eq!(output, 4);
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn covers_the_operation() {
        let (elapsed, ()) = measure(|| std::thread::sleep(Duration::from_millis(20)));
        assert!(elapsed >= 0.02);
    }

    #[test]
    fn invokes_operation_exactly_once() {
        let mut calls = 0;
        measure(|| calls += 1);
        assert_eq!(calls, 1);
    }
}
