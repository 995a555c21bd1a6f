use anyhow::Result;
use plotlib::{Samples, logger};

// 以表格形式打印采样结果
fn main() -> Result<()> {
    logger::init();

    let samples = Samples::generate()?;

    println!("{:>10} {:>12} {:>12}", "x", "tanh(x)", "tanh(x)/4");
    for (x, y, y2) in samples.rows() {
        println!("{x:>10.4} {y:>12.8} {y2:>12.8}");
    }

    Ok(())
}
