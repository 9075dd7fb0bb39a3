use mf_core::Error;

/// `true` for 1, 2, 4, 8, ...; zero is rejected explicitly.
pub fn is_power_of_two(d: usize) -> bool {
    d != 0 && (d & (d - 1)) == 0
}

/// Checks that color and alpha share a power-of-two resolution.
///
/// Resolution mismatch is reported before the power-of-two test.
pub fn check_inputs(color: (usize, usize), alpha: (usize, usize)) -> Result<(), Error> {
    if color != alpha {
        return Err(Error::InputMismatch { color, alpha });
    }
    let (width, height) = color;
    if !is_power_of_two(width) || !is_power_of_two(height) {
        return Err(Error::NotPowerOfTwo { width, height });
    }
    Ok(())
}

/// Boolean form of [`check_inputs`].
pub fn validate(color_w: usize, color_h: usize, alpha_w: usize, alpha_h: usize) -> bool {
    check_inputs((color_w, color_h), (alpha_w, alpha_h)).is_ok()
}
