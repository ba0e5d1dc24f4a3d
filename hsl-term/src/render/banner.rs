//! Startup banner.

use super::color::Style;

const BANNER: &str = r#" _   _ _____ _       _____                   
| | | /  ___| |     |_   _|                  
| |_| \ `--.| |       | | ___ _ __ _ __ ___  
|  _  |`--. \ |       | |/ _ \ '__| '_ ` _ \ 
| | | /\__/ / |____   | |  __/ |  | | | | | |
\_| |_\____/\_____/   \_/\___|_|  |_| |_| |_|"#;

/// The banner with every line painted in `style`, followed by a blank line.
pub fn banner(style: &Style) -> String {
    let mut out = String::new();
    for line in BANNER.lines() {
        out.push_str(&style.paint(line).to_string());
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_banner() {
        let text = banner(&Style::plain());
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with(" _   _ _____"));
        assert!(text.ends_with("|_| |_| |_|\n\n"));
    }

    #[test]
    fn lines_are_painted_separately() {
        let style = Style::parse(Some("blue"), Some("on_white")).unwrap();
        let text = banner(&style);
        for line in text.lines().take(6) {
            assert!(line.starts_with("\x1b[34;47m"), "{line:?}");
            assert!(line.ends_with("\x1b[0m"), "{line:?}");
        }
    }
}
