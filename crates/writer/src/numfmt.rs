//! Locale-independent number rendering.
//!
//! Digits are always ASCII `0`-`9` and the decimal separator is always `.`,
//! whatever the host locale says. Everything renders into a fixed stack
//! buffer; nothing allocates.

/// Scale used to extract the fractional part of a double (eleven digits).
const PRECISION: u64 = 100_000_000_000;

/// Doubles at or above 2^52 have no fractional bits.
const INTEGRAL_ONLY: f64 = 4_503_599_627_370_496.0;

/// Sign, twenty integral digits, the point and eleven fractional digits.
pub const NUM_BUF_LEN: usize = 40;

/// Scratch buffer for rendering one number at a time.
#[derive(Debug, Clone)]
pub struct NumBuf {
    buf: [u8; NUM_BUF_LEN],
}

impl Default for NumBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl NumBuf {
    pub fn new() -> Self {
        Self { buf: [0; NUM_BUF_LEN] }
    }

    pub fn format_u64(&mut self, value: u64) -> &[u8] {
        let len = write_u64(&mut self.buf, value);
        &self.buf[..len]
    }

    pub fn format_i64(&mut self, value: i64) -> &[u8] {
        let len = write_i64(&mut self.buf, value);
        &self.buf[..len]
    }

    /// Renders a finite double.
    ///
    /// The integral part is written as-is; the fractional part is truncated
    /// (never rounded) to eleven digits and written without trailing zeros.
    /// Integral parts above `u64::MAX` saturate. Callers reject NaN and
    /// infinities before getting here.
    pub fn format_f64(&mut self, value: f64) -> &[u8] {
        let len = write_f64(&mut self.buf, value);
        &self.buf[..len]
    }
}

fn digit_count(mut value: u64) -> usize {
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}

fn write_u64(out: &mut [u8], value: u64) -> usize {
    let len = digit_count(value);
    let mut n = value;
    for slot in out[..len].iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }
    len
}

fn write_i64(out: &mut [u8], value: i64) -> usize {
    if value < 0 {
        out[0] = b'-';
        return write_u64(&mut out[1..], value.unsigned_abs()) + 1;
    }
    write_u64(out, value as u64)
}

fn write_f64(out: &mut [u8], value: f64) -> usize {
    if value < 0.0 {
        out[0] = b'-';
        return write_f64(&mut out[1..], -value) + 1;
    }

    let integral = value as u64;
    let scale = PRECISION as f64;
    let mut fract = if value >= INTEGRAL_ONLY {
        0
    } else {
        (((value - integral as f64) * scale) as u64).min(PRECISION - 1)
    };
    let mut len = write_u64(out, integral);

    if fract != 0 {
        out[len] = b'.';
        len += 1;

        let mut mul = PRECISION;
        while fract != 0 {
            mul /= 10;
            let digit = fract / mul;
            out[len] = b'0' + digit as u8;
            len += 1;
            fract -= digit * mul;
        }
    }

    len
}
