//! Block-art glyphs for the junbi percent readout.

/// Height in rows of every glyph.
pub const FONT_HEIGHT: usize = 5;

/// Block digits (5 rows tall, 5 chars wide).
const DIGITS: [[&str; FONT_HEIGHT]; 10] = [
    // 0
    [
        "█████",
        "█   █",
        "█   █",
        "█   █",
        "█████",
    ],
    // 1
    [
        "  █  ",
        " ██  ",
        "  █  ",
        "  █  ",
        " ███ ",
    ],
    // 2
    [
        "█████",
        "    █",
        "█████",
        "█    ",
        "█████",
    ],
    // 3
    [
        "█████",
        "    █",
        " ████",
        "    █",
        "█████",
    ],
    // 4
    [
        "█   █",
        "█   █",
        "█████",
        "    █",
        "    █",
    ],
    // 5
    [
        "█████",
        "█    ",
        "█████",
        "    █",
        "█████",
    ],
    // 6
    [
        "█████",
        "█    ",
        "█████",
        "█   █",
        "█████",
    ],
    // 7
    [
        "█████",
        "    █",
        "   █ ",
        "  █  ",
        "  █  ",
    ],
    // 8
    [
        "█████",
        "█   █",
        "█████",
        "█   █",
        "█████",
    ],
    // 9
    [
        "█████",
        "█   █",
        "█████",
        "    █",
        "█████",
    ],
];

/// Percent sign (5 rows tall, 5 chars wide).
const PERCENT: [&str; FONT_HEIGHT] = [
    "██  █",
    "██ █ ",
    "  █  ",
    " █ ██",
    "█  ██",
];

/// Build the large percent readout (for example `42 %`) as
/// [`FONT_HEIGHT`] rows, without leading zeros.
pub fn build_percent_art(percent: u8) -> Vec<String> {
    let percent = percent.min(100);
    let digits: Vec<usize> = if percent == 100 {
        vec![1, 0, 0]
    } else if percent >= 10 {
        vec![(percent / 10) as usize, (percent % 10) as usize]
    } else {
        vec![percent as usize]
    };

    let mut lines = Vec::with_capacity(FONT_HEIGHT);
    for row in 0..FONT_HEIGHT {
        let mut line = String::new();
        for (i, digit) in digits.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(DIGITS[*digit][row]);
        }
        line.push_str("  ");
        line.push_str(PERCENT[row]);
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        assert_eq!(build_percent_art(0).len(), FONT_HEIGHT);
        assert_eq!(build_percent_art(100).len(), FONT_HEIGHT);
    }

    #[test]
    fn test_rows_have_equal_width() {
        for percent in [0, 7, 42, 99, 100] {
            let art = build_percent_art(percent);
            let width = art[0].chars().count();
            for row in &art {
                assert_eq!(row.chars().count(), width, "percent={percent}");
            }
        }
    }

    #[test]
    fn test_no_leading_zeros() {
        // One digit + separator + percent glyph.
        let single = build_percent_art(5)[0].chars().count();
        let double = build_percent_art(55)[0].chars().count();
        let triple = build_percent_art(100)[0].chars().count();
        assert!(single < double && double < triple);
    }

    #[test]
    fn test_overflow_clamped_to_100() {
        assert_eq!(build_percent_art(250), build_percent_art(100));
    }
}
