use super::Sample;

/// Sinusoid sampled every 10° with amplitude 10.
const BUILTIN_TABLE: [(f64, f64); 37] = [
    (0.0, 0.0),
    (10.0, 1.74),
    (20.0, 3.42),
    (30.0, 5.00),
    (40.0, 6.43),
    (50.0, 7.66),
    (60.0, 8.66),
    (70.0, 9.40),
    (80.0, 9.85),
    (90.0, 10.00),
    (100.0, 9.85),
    (110.0, 9.40),
    (120.0, 8.66),
    (130.0, 7.66),
    (140.0, 6.43),
    (150.0, 5.00),
    (160.0, 3.42),
    (170.0, 1.74),
    (180.0, 0.0),
    (190.0, -1.74),
    (200.0, -3.42),
    (210.0, -5.00),
    (220.0, -6.43),
    (230.0, -7.66),
    (240.0, -8.66),
    (250.0, -9.40),
    (260.0, -9.85),
    (270.0, -10.00),
    (280.0, -9.85),
    (290.0, -9.40),
    (300.0, -8.66),
    (310.0, -7.66),
    (320.0, -6.43),
    (330.0, -5.00),
    (340.0, -3.42),
    (350.0, -1.74),
    (360.0, 0.0),
];

pub fn builtin_samples() -> Vec<Sample> {
    BUILTIN_TABLE
        .iter()
        .map(|&(angle, acceleration)| Sample::new(angle, acceleration))
        .collect()
}
