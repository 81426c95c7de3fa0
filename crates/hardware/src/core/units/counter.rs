//! Counter Unit.
//!
//! Each core owns two counters (A and B). A counter is driven entirely by three
//! of its core's register-mapped longs: control (`CTRx`), frequency (`FRQx`) and
//! phase (`PHSx`). On every tick the owning core is Running, the counter:
//! 1. **Decodes** mode (bits 26-30), PLL divider (bits 23-25), pin A (bits 0-5) and pin B (bits 9-14).
//! 2. **Accumulates** `FRQx` into `PHSx` when the mode says so.
//! 3. **Drives** its output latch, which the core ORs into `OUTA`.
//!
//! Mode families:
//!
//! | Mode        | Behavior                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | 0           | disabled                                                          |
//! | 1, 2, 4     | PLL / NCO single-ended: accumulate, pin A = phase bit 31          |
//! | 3, 5        | PLL / NCO differential: as above, pin B = complement              |
//! | 6           | duty single-ended: pin A = carry of `PHS + FRQ`, then accumulate  |
//! | 7           | duty differential: as above, pin B = complement                   |
//! | 8-15        | edge detectors (reserved, no effect)                              |
//! | 16          | never                                                             |
//! | 17-31       | logic combinations of input pins A and B; accumulate when true    |

use crate::core::units::alu::unsigned_carry;

/// Mode field position in the control register.
const MODE_SHIFT: u32 = 26;
/// Mode field mask (5 bits).
const MODE_MASK: u32 = 0x1F;
/// PLL divider field position.
const PLL_DIV_SHIFT: u32 = 23;
/// PLL divider field mask (3 bits).
const PLL_DIV_MASK: u32 = 0x7;
/// Pin B select field position.
const PIN_B_SHIFT: u32 = 9;
/// Pin select field mask (6 bits).
const PIN_MASK: u32 = 0x3F;

/// First of the logic-combination modes; `mode - LOGIC_BASE` is a truth table.
const LOGIC_BASE: u32 = 0b10000;

/// Selects which register triple a counter reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CounterChannel {
    /// `CTRA`/`FRQA`/`PHSA`.
    A,
    /// `CTRB`/`FRQB`/`PHSB`.
    B,
}

/// Decoded fields of a `CTRx` control register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterControl {
    /// 5-bit counter mode.
    pub mode: u32,
    /// PLL divider (decoded for completeness; the PLL itself is not modeled).
    pub pll_div: u32,
    /// Pin A select, 0-63.
    pub pin_a: u32,
    /// Pin B select, 0-63.
    pub pin_b: u32,
}

impl CounterControl {
    /// Splits a control register value into its fields.
    pub const fn decode(ctr: u32) -> Self {
        Self {
            mode: (ctr >> MODE_SHIFT) & MODE_MASK,
            pll_div: (ctr >> PLL_DIV_SHIFT) & PLL_DIV_MASK,
            pin_a: ctr & PIN_MASK,
            pin_b: (ctr >> PIN_B_SHIFT) & PIN_MASK,
        }
    }
}

/// One waveform-generating counter.
#[derive(Clone, Debug)]
pub struct Counter {
    channel: CounterChannel,
    outputs: u32,
}

impl Counter {
    /// Creates an idle counter for the given register triple.
    pub const fn new(channel: CounterChannel) -> Self {
        Self {
            channel,
            outputs: 0,
        }
    }

    /// Register triple this counter reads.
    pub const fn channel(&self) -> CounterChannel {
        self.channel
    }

    /// Pin levels currently driven by this counter (bit per pin of port A).
    pub const fn outputs(&self) -> u32 {
        self.outputs
    }

    /// Releases every driven pin.
    pub const fn reset(&mut self) {
        self.outputs = 0;
    }

    /// Advances the counter by one tick.
    ///
    /// # Arguments
    ///
    /// * `ctr`    - Control register value.
    /// * `frq`    - Frequency register value.
    /// * `phs`    - Phase register value before this tick.
    /// * `inputs` - External input pin levels, read by the logic modes.
    ///
    /// # Returns
    ///
    /// The updated phase register value.
    pub const fn tick(&mut self, ctr: u32, frq: u32, phs: u32, inputs: u32) -> u32 {
        let control = CounterControl::decode(ctr);
        self.outputs = 0;
        match control.mode {
            1..=5 => {
                let next = phs.wrapping_add(frq);
                self.drive(control, next >> 31 != 0, matches!(control.mode, 3 | 5));
                next
            }
            6 | 7 => {
                let carry = unsigned_carry(phs, frq);
                self.drive(control, carry, control.mode == 7);
                phs.wrapping_add(frq)
            }
            mode @ 17..=31 => {
                let a = pin_level(inputs, control.pin_a);
                let b = pin_level(inputs, control.pin_b);
                let row = (a as u32) | ((b as u32) << 1);
                if ((mode - LOGIC_BASE) >> row) & 1 != 0 {
                    phs.wrapping_add(frq)
                } else {
                    phs
                }
            }
            _ => phs,
        }
    }

    /// Latches pin A (and, for differential modes, its complement on pin B).
    const fn drive(&mut self, control: CounterControl, level: bool, differential: bool) {
        self.set_pin(control.pin_a, level);
        if differential {
            self.set_pin(control.pin_b, !level);
        }
    }

    const fn set_pin(&mut self, pin: u32, level: bool) {
        if level && pin < 32 {
            self.outputs |= 1 << pin;
        }
    }
}

/// Level of an external pin; pins beyond port A read low.
#[inline]
const fn pin_level(inputs: u32, pin: u32) -> bool {
    pin < 32 && (inputs >> pin) & 1 != 0
}
