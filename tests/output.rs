use anyhow::Result;
use unidump::printer::{print_ranges, LineWidth};
use unidump::ranges::{default_ranges, parse_range_list, CharRange};

fn dump(ranges: &[CharRange], width: i64) -> Result<String> {
    let mut buf = Vec::with_capacity(4096);
    print_ranges(&mut buf, ranges, LineWidth::new(width)?)?;
    Ok(String::from_utf8(buf)?)
}

#[test]
fn default_blocks_wrap_cleanly() -> Result<()> {
    let ranges = default_ranges();
    let total: usize = ranges.iter().map(CharRange::count).sum();
    assert_eq!((0x259F - 0x2580 + 1) + (0x1FBFF - 0x1FB00 + 1), total);

    for width in [1, 7, 40, total - 1, total, total + 1] {
        let text = dump(&ranges, i64::try_from(width)?)?;

        // a char and its separator space, per code point
        let chars: usize = text.lines().map(|line| line.chars().count() / 2).sum();
        assert_eq!(total, chars, "char total at width {width}");

        let breaks = text.matches('\n').count();
        assert_eq!(total.div_ceil(width), breaks, "break count at width {width}");

        assert!(text.ends_with('\n'));
        assert!(!text.contains("\n\n"), "no empty lines at width {width}");

        let lines: Vec<&str> = text.lines().collect();
        for line in &lines[..lines.len() - 1] {
            assert_eq!(
                2 * width,
                line.chars().count(),
                "full line at width {width}"
            );
        }
        for line in &lines {
            assert!(line.ends_with(' '), "separator after the last char");
        }
    }

    Ok(())
}

#[test]
fn identical_on_repeat() -> Result<()> {
    let ranges = parse_range_list("U+2580-U+259F,1FB00-1FBFF")?;
    assert_eq!(default_ranges(), ranges);
    assert_eq!(dump(&ranges, 40)?, dump(&ranges, 40)?);
    Ok(())
}
