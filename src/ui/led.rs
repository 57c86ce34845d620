//! RGB indicator LED abstraction.

use palette::Srgb;

/// Trait for abstracting RGB LED hardware.
///
/// Implement this for your LED driver (PWM, GPIO, ...) so the control loop
/// can paint the assist level. Hardware errors are handled inside the
/// implementation - this method cannot fail.
pub trait RgbLed {
    /// Show `color`. Components are full 8-bit values.
    fn set_color(&mut self, color: Srgb<u8>);
}

/// Scale an 8-bit colour component onto a PWM duty range `0..=max_duty`.
///
/// Common-anode LEDs light when the pin is low, so their duty is inverted.
pub fn duty_for(component: u8, max_duty: u16, common_anode: bool) -> u16 {
    let duty = (u32::from(component) * u32::from(max_duty) / u32::from(u8::MAX)) as u16;

    if common_anode {
        max_duty - duty
    } else {
        duty
    }
}
