//! nRF52840 bindings for the pad's hardware seams.
//!
//! Buttons are plain GPIO inputs with internal pull-ups, the LED hangs off
//! one PWM instance (three channels), and the motor controller link is a
//! transmit-only UARTE at 1200 baud.

use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::peripherals::{PWM0, UARTE0};
use embassy_nrf::pwm::{Prescaler, SimplePwm};
use embassy_nrf::uarte::{self, Baudrate, Parity, UarteTx};
use embassy_nrf::{bind_interrupts, peripherals, Peripherals};
use embassy_time::Delay;
use pas_pad::config::{LED_COMMON_ANODE, LED_PWM_MAX_DUTY, SERIAL_BAUD};
use pas_pad::ui::led::duty_for;
use pas_pad::{ControlLoop, InputSampler, RgbLed, Transport};
use palette::Srgb;

bind_interrupts!(struct Irqs {
    UARTE0_UART0 => uarte::InterruptHandler<peripherals::UARTE0>;
});

// The UARTE is configured with a fixed Baudrate variant below.
const _: () = assert!(SERIAL_BAUD == 1200);

/// The control loop bound to this board.
pub type Pad = ControlLoop<Input<'static>, PwmLed, SerialLink, Delay>;

/// RGB LED on PWM0 channels 0/1/2 (red/green/blue).
pub struct PwmLed {
    pwm: SimplePwm<'static, PWM0>,
    max_duty: u16,
    common_anode: bool,
}

impl PwmLed {
    pub fn new(pwm: SimplePwm<'static, PWM0>, max_duty: u16, common_anode: bool) -> Self {
        Self {
            pwm,
            max_duty,
            common_anode,
        }
    }
}

impl RgbLed for PwmLed {
    fn set_color(&mut self, color: Srgb<u8>) {
        let [red, green, blue] = [color.red, color.green, color.blue]
            .map(|c| duty_for(c, self.max_duty, self.common_anode));

        self.pwm.set_duty(0, red);
        self.pwm.set_duty(1, green);
        self.pwm.set_duty(2, blue);
    }
}

/// Transmit half of UARTE0.
pub struct SerialLink {
    tx: UarteTx<'static, UARTE0>,
}

impl Transport for SerialLink {
    type Error = uarte::Error;

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // Packets are built on the stack, which is RAM, as EasyDMA requires.
        self.tx.blocking_write(data)
    }
}

/// Claim the pad's peripherals and build the control loop.
///
/// Pin map (see `config.rs`): buttons P0.11/P0.12/P0.24, LED
/// P0.13/P0.14/P0.15, UART TX P0.06.
pub fn init(p: Peripherals) -> Pad {
    let buttons = InputSampler::new(
        Input::new(p.P0_11, Pull::Up),
        Input::new(p.P0_12, Pull::Up),
        Input::new(p.P0_24, Pull::Up),
    );

    let mut pwm = SimplePwm::new_3ch(p.PWM0, p.P0_13, p.P0_14, p.P0_15);
    pwm.set_prescaler(Prescaler::Div16);
    pwm.set_max_duty(LED_PWM_MAX_DUTY);
    let led = PwmLed::new(pwm, LED_PWM_MAX_DUTY, LED_COMMON_ANODE);

    let mut uart_config = uarte::Config::default();
    uart_config.parity = Parity::EXCLUDED;
    uart_config.baudrate = Baudrate::BAUD1200;
    let link = SerialLink {
        tx: UarteTx::new(p.UARTE0, Irqs, p.P0_06, uart_config),
    };

    ControlLoop::new(buttons, led, link, Delay)
}
