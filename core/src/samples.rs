//! Published reference values for the formula.
//!
//! Expected values are rounded to 11 decimals, well inside the 1e-10
//! conformance tolerance.

use crate::color::Lab;
use crate::vectors::Sample;

#[allow(clippy::too_many_arguments)]
const fn s(l1: f64, a1: f64, b1: f64, l2: f64, a2: f64, b2: f64, delta_e: f64) -> Sample {
    Sample::new(Lab::new(l1, a1, b1), Lab::new(l2, a2, b2), delta_e)
}

#[rustfmt::skip]
pub const REFERENCE_SAMPLES: &[Sample] = &[
    s(75.0, -20.412, 102.5,  75.0, -20.412, 102.5,  0.0),
    s(31.0, 38.1, -100.689,  31.0, 38.1, -100.6308,  0.02031251581),
    s(46.6, -9.344, -127.6,  46.6, -9.44, -127.6,  0.03695828417),
    s(2.0, 109.6, 51.9861,  118.2, -54.71, 51.8,  133.04909930124),
    s(126.49, -46.4, 18.7,  10.6, 90.53, 61.79,  117.14241683064),
    s(128.0, -65.44, -8.3,  128.0, -65.44, -8.3,  0.0),
    s(8.8936, -102.8, 86.8,  8.8936, -102.8, 86.849,  0.01088010727),
    s(42.9, 53.0, -50.9,  42.9, 53.0, -51.0,  0.0409705579),
    s(14.9798, -70.632, 82.2,  14.9798, -70.632, 82.4934,  0.07260054571),
    s(54.0, -100.45, 23.903,  54.0, -100.9037, 23.903,  0.08653303132),
    s(40.0, 80.647, -4.0,  40.0, 79.4, -4.0,  0.27145472641),
    s(36.2134, 108.0, 43.8,  36.2134, 108.0, 42.586,  0.437185933),
    s(46.281, 9.9409, 48.1,  46.281, 9.0, 48.1,  0.65133785804),
    s(40.484, 126.842, 104.339,  40.484, 122.74, 104.339,  1.03360227874),
    s(44.0, -123.9805, 114.45,  44.0, -130.94, 114.0,  1.24008633516),
    s(105.0, 92.0, 92.142,  105.0, 87.59, 92.142,  1.44597440672),
    s(17.8958, -60.74, -9.44,  17.8958, -60.74, -6.119,  1.77058503931),
    s(126.0, -54.91, -2.354,  126.0, -56.7, -5.9,  1.98149019821),
    s(80.99, -2.2, 78.0,  80.99, -2.2, 68.455,  2.22692613885),
    s(105.9, 17.534, -93.3,  108.86, 21.0, -94.0,  2.40280987434),
    s(84.3, -84.61, 69.1,  88.083, -84.61, 65.4484,  2.64030590341),
    s(93.8774, 26.93, 36.21,  93.8774, 22.0, 36.21,  3.04909996041),
    s(108.51, 123.37, 80.5698,  108.51, 123.37, 70.6,  3.20639516185),
    s(104.649, 9.759, -33.0,  111.192, 9.759, -33.0,  3.50600010455),
    s(111.46, 49.901, 38.0,  111.46, 55.1911, 48.0,  3.61485062757),
    s(70.414, -83.48, 4.1603,  70.414, -83.48, 13.29,  3.91631093378),
    s(120.8, -57.333, -88.89,  129.32, -51.991, -88.89,  4.27118639761),
    s(123.31, 124.8963, 66.396,  132.76, 124.8963, 66.396,  4.35763501084),
    s(121.8, -7.91, 44.76,  123.0, -15.9, 46.9,  4.83954494008),
    s(120.8, -84.1097, -98.602,  114.2217, -76.0, -113.6,  5.03282590435),
    s(4.9657, 95.0, -84.772,  11.0, 120.3723, -98.15,  5.62650839731),
    s(35.5064, 99.0, 63.0,  36.049, 110.0, 86.8606,  6.31169733828),
    s(53.08, -79.0, -126.4543,  58.3689, -82.06, -96.0,  7.45551466404),
    s(124.91, -74.49, -99.5,  114.041, -97.816, -86.839,  8.51254802065),
    s(78.2445, 51.773, 73.7,  86.5, 82.0, 101.3076,  9.46437310384),
    s(39.0, -55.043, -81.443,  44.9647, -35.0, -109.73,  10.28718759581),
    s(14.8, 54.73, -112.37,  25.67, 18.075, -63.8992,  11.85797599414),
    s(114.726, -121.77, 85.5,  114.0, -73.856, 102.162,  12.46634471848),
    s(95.9508, 81.5, 96.0,  94.861, 45.0969, 89.163,  13.50389100707),
    s(53.9, -5.9, 73.0,  42.904, 8.8451, 88.51,  14.1273649909),
    s(37.4, -44.732, 85.444,  52.8, -48.0, 66.6,  15.71728968186),
    s(40.9, -27.743, -122.0544,  27.4, -7.035, -83.0,  16.14982484415),
    s(79.28, 88.0, -72.521,  104.0, 99.8, -50.52,  17.33682468253),
    s(46.0, -122.0, -115.9,  32.48, -93.0, -44.5,  18.64194324706),
    s(89.3484, 113.917, 21.77,  84.78, 44.7578, -11.7881,  19.59176199882),
    s(77.5, -108.58, 126.0,  105.05, -72.175, 60.436,  20.80923048858),
    s(70.9, -116.0, -72.253,  54.6383, -51.879, -89.0,  21.35609387699),
    s(10.33, -9.009, -93.0,  4.67, 32.7, -93.5,  22.82541279255),
    s(99.715, -98.892, 123.37,  88.05, -120.184, 31.07,  24.02279121533),
    s(95.2, 49.8454, 76.5,  84.9099, 12.074, 100.702,  24.58449512986),
    s(35.0346, -80.438, 8.255,  61.6, -20.0, -86.15,  49.20890735575),
    s(80.0, -88.78, -77.5569,  79.479, 66.3, -104.19,  55.4456271891),
    s(59.0, 93.545, -8.0,  114.863, -26.1738, -43.0,  85.01403243966),
    s(45.8, -51.79, -117.35,  115.842, 111.1864, -36.4,  118.44269488166),
    s(101.4, 119.5, 13.24,  5.76, -37.965, -110.1606,  130.70704766893),
    s(62.083, 127.344, 64.731,  62.083, 127.344, 64.73,  0.00032241343),
    s(60.0, 107.79, 85.74,  60.0, 111.9496, 78.9,  3.16810733164),
    s(91.411, -74.8, 100.6382,  98.586, -74.8, 100.6382,  4.29211879901),
    s(74.0, 51.96, 101.3,  80.28, 51.96, 101.3,  4.48032775819),
    s(66.21, -85.0, -29.3,  65.0128, -115.0, -63.3679,  9.62664144166),
    s(5.0, -54.33, -65.5379,  13.4, -100.9453, -70.9296,  11.91217801227),
    s(30.4287, 68.1692, -71.4392,  33.18, 30.0, -33.6759,  12.77597894044),
    s(84.0, -61.27, -38.072,  85.43, -19.2, -22.7,  14.70040106466),
    s(40.585, -125.684, -3.5011,  21.6779, -52.4257, -1.14,  20.83124213833),
    s(8.9354, 14.5, -67.32,  93.207, 46.638, -31.0,  89.87553727076),
];

#[cfg(test)]
mod tests {
    use super::REFERENCE_SAMPLES;
    use crate::compare::check;
    use crate::config::Config;

    #[test]
    fn every_reference_sample_conforms() {
        let config = Config::default();
        let failures: Vec<_> = REFERENCE_SAMPLES
            .iter()
            .enumerate()
            .filter_map(|(i, sample)| check(i + 1, sample, &config))
            .collect();
        assert!(failures.is_empty(), "{failures:#?}");
    }

    #[test]
    fn reversed_reference_samples_conform() {
        let config = Config::default();
        for (i, sample) in REFERENCE_SAMPLES.iter().enumerate() {
            let mut reversed = *sample;
            std::mem::swap(&mut reversed.reference, &mut reversed.sample);
            assert_eq!(check(i + 1, &reversed, &config), None);
        }
    }
}
