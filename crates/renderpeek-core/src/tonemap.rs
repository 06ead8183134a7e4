use ndarray::ArrayD;
use tracing::trace;

/// Gamma applied when the caller does not supply one.
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Tone-map an image for display: output = clamp(brightness * input, 0, 1)^(1/gamma).
///
/// Computed elementwise, in that order: scale, clamp, gamma. The input is
/// assumed normalized to [0, 1]; out-of-range and negatively scaled values
/// are absorbed by the clamp. For any gamma > 0 the output lies in [0, 1].
///
/// gamma is not validated: for gamma <= 0 the output is whatever powf
/// produces for the non-finite or negative exponent, special float values
/// included.
pub fn preprocess(image: &ArrayD<f64>, brightness: f64, gamma: f64) -> ArrayD<f64> {
    let inv_gamma = 1.0 / gamma;
    trace!(brightness, gamma, "Tone mapping image");
    image.mapv(|v| (brightness * v).clamp(0.0, 1.0).powf(inv_gamma))
}

/// Tone-map with the default gamma of 2.2.
pub fn preprocess_default(image: &ArrayD<f64>, brightness: f64) -> ArrayD<f64> {
    preprocess(image, brightness, DEFAULT_GAMMA)
}
