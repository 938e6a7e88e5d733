use console::Style;
use imgview_core::histogram::Histogram;
use imgview_core::image_data::ImageData;
use imgview_core::magnifier::{hex_rgba, MagnifierGrid};

/// Widest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    warn: Style,
    dim: Style,
    channels: [Style; 3],
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            warn: Style::new().yellow(),
            dim: Style::new().dim(),
            channels: [
                Style::new().red(),
                Style::new().green(),
                Style::new().blue(),
            ],
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title
            .apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_image_summary(image: &ImageData) {
    let s = Styles::new();
    print_title(&s, &image.filename);

    println!(
        "  {:<14}{}",
        s.label.apply_to("Format"),
        s.value.apply_to(&image.format)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Pixel format"),
        s.value.apply_to(&image.pixel_format)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Dimensions"),
        s.value.apply_to(format!("{}x{}", image.width, image.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Channels"),
        s.value.apply_to(image.channels)
    );
    println!();

    println!("  {}", s.header.apply_to("Value range"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min"),
        s.value.apply_to(format!("{:.6}", image.min_value))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max"),
        s.value.apply_to(format!("{:.6}", image.max_value))
    );
    if image.has_nan {
        println!(
            "    {:<12}{}",
            s.label.apply_to("NaN/Inf"),
            s.warn.apply_to("present (excluded from range)")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("NaN/Inf"),
            s.dim.apply_to("none")
        );
    }
    println!();
}

pub fn print_histogram(filename: &str, hist: &Histogram) {
    let s = Styles::new();
    print_title(&s, &format!("Histogram of {filename}"));

    println!(
        "  {:<14}{}",
        s.label.apply_to("Range"),
        s.value.apply_to(format!("{:.6} .. {:.6}", hist.min, hist.max))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Bins"),
        s.value.apply_to(hist.bin_count())
    );
    println!();

    let heights: Vec<Vec<f32>> = (0..3).map(|c| hist.normalized(c)).collect();
    for i in 0..hist.bin_count() {
        let counts = [hist.bins[0][i], hist.bins[1][i], hist.bins[2][i]];
        if counts.iter().all(|&c| c == 0) {
            continue;
        }
        print!("  {:>12.6} ", hist.bin_value(i));
        for c in 0..3 {
            let len = (heights[c][i] * BAR_WIDTH as f32).round() as usize;
            print!(
                " {:>8} {:<width$}",
                counts[c],
                s.channels[c].apply_to("\u{2588}".repeat(len)),
                width = BAR_WIDTH
            );
        }
        println!();
    }
    println!();
}

pub fn print_pixel(at: (usize, usize), pixel: [f32; 4]) {
    let s = Styles::new();
    print_title(&s, &format!("Pixel ({}, {})", at.0, at.1));

    for (name, v) in ["R", "G", "B", "A"].iter().zip(pixel) {
        println!(
            "  {:<14}{}",
            s.label.apply_to(name),
            s.value.apply_to(format!("{v:.4}"))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Hex"),
        s.value.apply_to(hex_rgba(pixel))
    );
    println!();
}

/// Neighbourhood grid; each cell is the displayed colour as hex, `-` off-image.
pub fn print_magnifier(grid: &MagnifierGrid) {
    let s = Styles::new();
    println!("  {}", s.header.apply_to("Neighbourhood"));
    let half = grid.size / 2;
    for row in 0..grid.size {
        print!("   ");
        for col in 0..grid.size {
            let text = match grid.cell(col, row) {
                Some(cell) => hex_rgba(cell)[..7].to_string(),
                None => format!("{:<7}", "-"),
            };
            if row == half && col == half {
                print!(" {}", s.warn.apply_to(text));
            } else {
                print!(" {text}");
            }
        }
        println!();
    }
    println!();
}
