// src/fpenv.rs
//
// Process-wide floating-point environment. Flushing subnormals to zero
// keeps the fast basis path free of denormal stalls on near-zero cross
// products. Call once at startup, before any sampling or basis
// computation; the setting is read-only hardware state afterwards.

/// Enable flush-to-zero and denormals-are-zero in the SSE control
/// register.
#[cfg(target_arch = "x86_64")]
#[allow(deprecated)]
pub fn enable_flush_to_zero() {
    use std::arch::x86_64::{
        _mm_getcsr, _mm_setcsr, _MM_FLUSH_ZERO_ON, _MM_SET_FLUSH_ZERO_MODE,
    };

    // DAZ (denormals-are-zero) has no stable named intrinsic; it is
    // MXCSR bit 6 (0x0040, == _MM_DENORMALS_ZERO_ON).
    const MM_DENORMALS_ZERO_ON: u32 = 0x0040;

    unsafe {
        _MM_SET_FLUSH_ZERO_MODE(_MM_FLUSH_ZERO_ON);
        _mm_setcsr(_mm_getcsr() | MM_DENORMALS_ZERO_ON);
    }
}

/// No hardware flush-to-zero control on this target; subnormals keep
/// their IEEE-754 behaviour.
#[cfg(not(target_arch = "x86_64"))]
pub fn enable_flush_to_zero() {}
