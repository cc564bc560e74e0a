use console::Style;
use laplace_core::pipeline::config::CodecConfig;
use laplace_core::pipeline::PipelineOutput;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_codec_summary(config: &CodecConfig) {
    let s = Styles::new();
    let p = &config.pyramid;

    println!();
    println!("  {}", s.title.apply_to("Laplacian Pyramid"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(17)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    match config.difference {
        Some(ref path) => println!(
            "  {:<14}{}",
            s.label.apply_to("Difference"),
            s.path.apply_to(path.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Difference"),
            s.disabled.apply_to("disabled")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Channels"),
        s.method.apply_to(if config.color { "RGB" } else { "Mono" })
    );
    println!();

    println!("  {}", s.header.apply_to("Pyramid"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Levels"),
        s.value.apply_to(p.levels)
    );
    if p.quantization == 0.0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Quantize"),
            s.disabled.apply_to("lossless")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Quantize"),
            s.value.apply_to(p.quantization)
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Kernel a"),
        s.value.apply_to(p.kernel_a)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Border"),
        s.method.apply_to(p.border)
    );
    println!();
}

pub fn print_output_summary(output: &PipelineOutput) {
    let s = Styles::new();

    println!();
    println!("  {}", s.header.apply_to("Planes"));
    let last = output.plane_dims.len().saturating_sub(1);
    for (level, (rows, cols)) in output.plane_dims.iter().enumerate() {
        let kind = if level == last { "baseband" } else { "detail" };
        println!(
            "    {:<12}{}",
            s.label.apply_to(format!("[{level}] {kind}")),
            s.value.apply_to(format!("{cols}x{rows}"))
        );
    }
    println!();

    let stats = &output.stats;
    println!("  {}", s.header.apply_to("Reconstruction"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!(
            "{}x{}",
            output.decoded.width(),
            output.decoded.height()
        ))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max error"),
        s.value.apply_to(format!("{:.4}", stats.max_abs))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mean error"),
        s.value.apply_to(format!("{:.4}", stats.mean_abs))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("RMSE"),
        s.value.apply_to(format!("{:.4}", stats.rmse))
    );
    let psnr = if stats.psnr.is_finite() {
        format!("{:.2} dB", stats.psnr)
    } else {
        "exact".to_string()
    };
    println!(
        "    {:<12}{}",
        s.label.apply_to("PSNR"),
        s.value.apply_to(psnr)
    );
    println!();
}
