//! Inverse standard normal CDF and d-prime.
//!
//! The quantile function uses Acklam's rational approximation, which has a
//! relative error below 1.15e-9 over the open unit interval.

use crate::rates::SdtRates;
use serde::Serialize;

const A: [f64; 6] = [
    -3.969683028665376e1,
    2.209460984245205e2,
    -2.759285104469687e2,
    1.383577518672690e2,
    -3.066479806614716e1,
    2.506628277459239e0,
];
const B: [f64; 5] = [
    -5.447609879822406e1,
    1.615858368580409e2,
    -1.556989798598866e2,
    6.680131188771972e1,
    -1.328068155288572e1,
];
const C: [f64; 6] = [
    -7.784894002430293e-3,
    -3.223964580411365e-1,
    -2.400758277161838e0,
    -2.549732539343734e0,
    4.374664141464968e0,
    2.938163982698783e0,
];
const D: [f64; 4] = [
    7.784695709041462e-3,
    3.224671290700398e-1,
    2.445134137142996e0,
    3.754408661907416e0,
];

const P_LOW: f64 = 0.02425;

/// z-transform of a probability. 0 and 1 map to -inf and +inf.
pub fn probit(p: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        tail(p)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail(1.0 - p)
    }
}

fn tail(p: f64) -> f64 {
    let q = (-2.0 * p.ln()).sqrt();
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

/// Distance kept between a rate and 0 or 1 before the z-transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateClamp {
    pub hit_epsilon: f64,
    pub false_alarm_epsilon: f64,
}

impl RateClamp {
    pub fn uniform(epsilon: f64) -> Self {
        Self {
            hit_epsilon: epsilon,
            false_alarm_epsilon: epsilon,
        }
    }

    pub fn apply(&self, rates: SdtRates) -> SdtRates {
        SdtRates {
            hit_rate: clamp_rate(rates.hit_rate, self.hit_epsilon),
            false_alarm_rate: clamp_rate(rates.false_alarm_rate, self.false_alarm_epsilon),
        }
    }
}

fn clamp_rate(rate: f64, epsilon: f64) -> f64 {
    let epsilon = epsilon.clamp(0.0, 0.5);
    rate.clamp(epsilon, 1.0 - epsilon)
}

/// Sensitivity index z(hit) - z(false alarm), computed on clamped rates.
pub fn dprime(hit_rate: f64, false_alarm_rate: f64, clamp: RateClamp) -> f64 {
    let rates = clamp.apply(SdtRates {
        hit_rate,
        false_alarm_rate,
    });
    probit(rates.hit_rate) - probit(rates.false_alarm_rate)
}
