use console::{self, Alignment};

use crate::run::Row;

pub fn print_table(rows: &[Row], align: bool) {
    print!("{}", make_table(rows, align));
}

/// One line per row. With `align`, each output is preceded by its input,
/// padded to the widest input so the outputs line up.
pub fn make_table(rows: &[Row], align: bool) -> String {
    let mut table = String::new();

    if !align {
        for row in rows {
            table.push_str(&row.output);
            table.push('\n');
        }
        return table;
    }

    let max_input_len = rows
        .iter()
        .map(|row| console::measure_text_width(&row.input))
        .max()
        .unwrap_or(0);

    for row in rows {
        let input = console::pad_str(&row.input, max_input_len, Alignment::Left, None);
        table.push_str(&format!("{input}   {output}\n", output = row.output));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row {
                input: "1024".to_string(),
                output: "1 KiB".to_string(),
            },
            Row {
                input: "1610612736".to_string(),
                output: "1.5 GiB".to_string(),
            },
        ]
    }

    #[test]
    fn plain() {
        assert_eq!(make_table(&rows(), false), "1 KiB\n1.5 GiB\n");
    }

    #[test]
    fn aligned() {
        assert_eq!(
            make_table(&rows(), true),
            "1024         1 KiB\n1610612736   1.5 GiB\n"
        );
    }

    #[test]
    fn empty() {
        assert_eq!(make_table(&[], true), "");
    }
}
