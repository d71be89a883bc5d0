use indicatif::{ProgressBar, ProgressStyle};

pub struct EpochProgressBar {
    bar: ProgressBar,
}

impl EpochProgressBar {
    pub fn new(epochs: usize) -> Result<Self, Box<dyn std::error::Error>> {
        let bar = ProgressBar::new(epochs as u64);
        bar.set_style(ProgressStyle::default_bar().template(
            "{spinner:.cyan} epoch {pos}/{len} [{wide_bar:.cyan/blue}] {eta_precise}",
        )?);
        Ok(Self { bar })
    }

    pub fn update(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
