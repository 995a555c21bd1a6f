use crate::{error::FigureError, sampler::Samples};
use ndarray::Array1;
use plotters::{coord::Shift, drawing::DrawingAreaErrorKind, prelude::*};
use std::ops::Range;
use std::path::Path;
use tracing::debug;

pub const FIGURE_SIZE: (u32, u32) = (1000, 300); // 10x3 英寸, 100 dpi
pub const PANEL_COLUMNS: usize = 3;
pub const OUTPUT_PATH: &str = "target/output.png";

/// 第一个子图的标题。
///
/// 注意: 标题与实际曲线不符，画的是 tanh 而不是 log2，文字按原样保留
pub const PRIMARY_TITLE: &str = "plot y = log2(x)";

/// 第二个子图的标题，`f(y)` 实际指 `f(x)`，同样按原样保留
pub const SECONDARY_TITLE: &str = "plot y = f(y) / 4";

const TITLE_FONT: (&str, u32) = ("sans-serif", 20);
const AXIS_MARGIN: f64 = 0.05; // 坐标轴两端各留 5% 空白

/// 一条折线
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    points: Vec<(f64, f64)>,
}

impl Line {
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }
}

/// 子图
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Panel {
    title: Option<String>,
    lines: Vec<Line>,
}

impl Panel {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 根据数据自动计算坐标范围，空子图使用单位正方形
    pub fn bounds(&self) -> Result<(Range<f64>, Range<f64>), FigureError> {
        let points = self.lines.iter().flat_map(|line| line.points.iter().copied());
        bounds_of(points)
    }

    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
        let (x_range, y_range) = self.bounds()?;

        let mut builder = ChartBuilder::on(area);
        builder
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40);

        if let Some(title) = &self.title {
            builder.caption(title, TITLE_FONT);
        }

        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(render_error)?;

        chart.configure_mesh().draw().map_err(render_error)?;

        for line in &self.lines {
            chart
                .draw_series(LineSeries::new(line.points.iter().copied(), &BLUE))
                .map_err(render_error)?;
        }

        Ok(())
    }
}

fn bounds_of(
    mut points: impl Iterator<Item = (f64, f64)>,
) -> Result<(Range<f64>, Range<f64>), FigureError> {
    let Some((x0, y0)) = points.next() else {
        return Ok((0.0..1.0, 0.0..1.0));
    };

    let (x_min, x_max, y_min, y_max) = points.fold(
        (x0, x0, y0, y0),
        |(x_min, x_max, y_min, y_max), (x, y)| {
            (x_min.min(x), x_max.max(x), y_min.min(y), y_max.max(y))
        },
    );

    Ok((pad(x_min, x_max)?, pad(y_min, y_max)?))
}

// 加上边距后的范围宽度也必须有限，否则 plotters 计算刻度时会卡死
fn pad(min: f64, max: f64) -> Result<Range<f64>, FigureError> {
    let span = max - min;
    let margin = if span > 0.0 { span * AXIS_MARGIN } else { 0.5 };
    let range = (min - margin)..(max + margin);

    if !(range.end - range.start).is_finite() {
        return Err(FigureError::RangeOverflow { min, max });
    }

    Ok(range)
}

fn render_error<E>(err: DrawingAreaErrorKind<E>) -> FigureError
where
    E: std::error::Error + Send + Sync,
{
    FigureError::Render(err.to_string())
}

/// 一行多列的图
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    size: (u32, u32),
    panels: Vec<Panel>,
}

impl Figure {
    /// 创建一行 `columns` 个空子图
    pub fn subplots(columns: usize, size: (u32, u32)) -> Figure {
        Figure {
            size,
            panels: vec![Panel::default(); columns],
        }
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    fn panel_mut(&mut self, index: usize) -> Result<&mut Panel, FigureError> {
        let panels = self.panels.len();
        self.panels
            .get_mut(index)
            .ok_or(FigureError::PanelOutOfRange { index, panels })
    }

    pub fn set_title(&mut self, index: usize, title: impl Into<String>) -> Result<(), FigureError> {
        self.panel_mut(index)?.title = Some(title.into());
        Ok(())
    }

    /// 在第 `index` 个子图上画 `(x[i], y[i])` 折线
    pub fn plot(
        &mut self,
        index: usize,
        x: &Array1<f64>,
        y: &Array1<f64>,
    ) -> Result<(), FigureError> {
        if x.len() != y.len() {
            return Err(FigureError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        if x.is_empty() {
            return Err(FigureError::EmptySeries);
        }

        let points: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();

        if let Some(bad) = points
            .iter()
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(FigureError::NonFinite { index: bad });
        }

        // 与子图已有的折线合并后仍需能画出来
        let panel = self.panel_mut(index)?;
        let existing = panel.lines.iter().flat_map(|line| line.points.iter().copied());
        bounds_of(existing.chain(points.iter().copied()))?;

        panel.lines.push(Line { points });

        Ok(())
    }

    /// 把整张图画到任意 plotters 后端上
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), FigureError> {
        root.fill(&WHITE).map_err(render_error)?;

        if self.panels.is_empty() {
            return root.present().map_err(render_error);
        }

        let areas = root.split_evenly((1, self.panels.len()));
        for (panel, area) in self.panels.iter().zip(areas.iter()) {
            panel.draw(area)?;
        }

        root.present().map_err(render_error)?;

        Ok(())
    }

    /// 保存为图片，格式由扩展名决定
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FigureError> {
        let path = path.as_ref();
        debug!("rendering {}x{} figure to {}", self.size.0, self.size.1, path.display());

        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        self.draw(&root)
    }
}

/// 1x3 的图: 第一个子图画 tanh，第二个画 tanh / 4，第三个留空
pub fn tanh_figure(samples: &Samples) -> Result<Figure, FigureError> {
    let mut figure = Figure::subplots(PANEL_COLUMNS, FIGURE_SIZE);

    figure.set_title(0, PRIMARY_TITLE)?;
    figure.plot(0, samples.domain(), samples.primary())?;

    figure.set_title(1, SECONDARY_TITLE)?;
    figure.plot(1, samples.domain(), samples.secondary())?;

    Ok(figure)
}
