use console::Style;
use perfuse_core::pipeline::config::PipelineConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_quantify_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Perfuse Quantification"));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}")
    );
    println!();

    // Input volumes
    println!("  {}", s.header.apply_to("Inputs"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("ASL"),
        s.path.apply_to(config.asl.display())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("M0"),
        s.path.apply_to(config.m0.display())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mask"),
        s.path.apply_to(config.mask.display())
    );
    println!();

    // Scan timing
    println!("  {}", s.header.apply_to("Timing"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("LD"),
        s.value
            .apply_to(format!("{} s", config.timing.labeling_duration))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("PLD"),
        s.value
            .apply_to(format!("{} s", config.timing.post_labeling_delay))
    );
    println!();

    // Calibration
    println!("  {}", s.header.apply_to("Calibration"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("M0 scale"),
        s.value.apply_to(config.m0_scale)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Alpha"),
        s.value.apply_to(config.constants.labeling_efficiency)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Lambda"),
        s.value.apply_to(config.constants.partition_coefficient)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Blood T1"),
        s.value
            .apply_to(format!("{} s", config.constants.blood_t1))
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output_dir.display())
    );
    println!();
}
