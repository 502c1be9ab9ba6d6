use colored::Colorize;
use palette::{Gradient, LinSrgb, Srgb};

const BANNER: &str = r#"  __       _         __      _       _
 / _| ___ | |_ __ _ / _| ___| |_ ___| |__
| |_ / _ \| __/ _` | |_ / _ \ __/ __| '_ \
|  _| (_) | || (_| |  _|  __/ || (__| | | |
|_|  \___/ \__\__,_|_|  \___|\__\___|_| |_|
         TWS firmware fetch & verify"#;

fn create_gradient_line(width: usize, color1: LinSrgb, color2: LinSrgb) -> String {
    let gradient = Gradient::new(vec![color1, color2]);

    (0..width)
        .map(|i| {
            let color = gradient.get(i as f32 / width as f32);
            let rgb = Srgb::from_linear(color).into_components();
            format!(
                "\x1b[38;2;{};{};{}m▀\x1b[0m",
                (rgb.0 * 255.0) as u8,
                (rgb.1 * 255.0) as u8,
                (rgb.2 * 255.0) as u8
            )
        })
        .collect()
}

pub fn print_banner() {
    let cyan = LinSrgb::new(0.0, 0.717, 0.831); // #00B7D4
    let blue = LinSrgb::new(0.0, 0.478, 1.0); // #007AFF

    for line in BANNER.lines() {
        println!("{}", line.bright_cyan());
    }

    println!("{}", create_gradient_line(44, cyan, blue));
}
