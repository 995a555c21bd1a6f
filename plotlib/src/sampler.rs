use crate::error::SamplerError;
use ndarray::Array1;
use tracing::debug;

pub const DOMAIN_START: f64 = 0.0;
pub const DOMAIN_END: f64 = 100.0;
pub const SAMPLE_COUNT: usize = 50;
pub const SCALE_FACTOR: f64 = 4.0;

/// 在闭区间 `[start, end]` 上生成 `count` 个等距采样点，包含两个端点
pub fn linspace(start: f64, end: f64, count: usize) -> Result<Array1<f64>, SamplerError> {
    if count < 2 {
        return Err(SamplerError::TooFewSamples { count });
    }

    if !start.is_finite() || !end.is_finite() || end <= start {
        return Err(SamplerError::InvalidBounds { start, end });
    }

    let mut samples = Array1::linspace(start, end, count);

    // `start + step * i` 的舍入误差会让最后一个点偏离终点，这里直接钉住
    samples[count - 1] = end;

    Ok(samples)
}

/// 定义域: [0, 100] 上的 50 个等距点
pub fn generate_domain() -> Result<Array1<f64>, SamplerError> {
    linspace(DOMAIN_START, DOMAIN_END, SAMPLE_COUNT)
}

// Tanh 函数
pub fn apply_function(domain: &Array1<f64>) -> Array1<f64> {
    domain.mapv(f64::tanh)
}

/// 逐元素除以 `factor`
pub fn scale(series: &Array1<f64>, factor: f64) -> Result<Array1<f64>, SamplerError> {
    if factor == 0.0 || !factor.is_finite() {
        return Err(SamplerError::InvalidFactor(factor));
    }

    Ok(series / factor)
}

/// 一次采样的结果。三个序列长度相同，创建后不可修改
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    domain: Array1<f64>,
    primary: Array1<f64>,
    secondary: Array1<f64>,
}

impl Samples {
    /// 定义域 -> tanh -> 缩放为 1/4
    pub fn generate() -> Result<Samples, SamplerError> {
        let domain = generate_domain()?;
        let primary = apply_function(&domain);
        let secondary = scale(&primary, SCALE_FACTOR)?;

        debug!(
            "sampled {} points over [{}, {}], scale factor {}",
            domain.len(),
            DOMAIN_START,
            DOMAIN_END,
            SCALE_FACTOR
        );

        Ok(Samples {
            domain,
            primary,
            secondary,
        })
    }

    pub fn domain(&self) -> &Array1<f64> {
        &self.domain
    }

    pub fn primary(&self) -> &Array1<f64> {
        &self.primary
    }

    pub fn secondary(&self) -> &Array1<f64> {
        &self.secondary
    }

    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// 按行遍历 `(x, tanh(x), tanh(x) / 4)`
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.domain
            .iter()
            .zip(self.primary.iter())
            .zip(self.secondary.iter())
            .map(|((&x, &y), &y2)| (x, y, y2))
    }
}
