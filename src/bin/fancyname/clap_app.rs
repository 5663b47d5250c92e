use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, value_parser, ArgAction, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .args_conflicts_with_subcommands(true)
    .arg(
        arg!([text] ... "The text to decorate (defaults to \"Your Name\")")
        .long_help(
            "The text to decorate. Multiple words are joined with a single space. \
                    Leading and trailing whitespace is ignored.",
        ),
    )
    .arg(
        arg!(-c --category <CATEGORY> "Only prints styles of the given category")
        .long_help(
            "Restricts the output to one category : gamer, aesthetic, bangla, fancy, \
                    english, arrow, symbol, graphic or free.",
        ),
    )
    .arg(
        arg!(-n --limit <N> "Number of styles per page")
        .long_help("Sets the page size (defaults to the page_size value of the configuration).")
        .value_parser(value_parser!(u64).range(1..)),
    )
    .arg(
        arg!(-p --page <N> "Page to print")
        .long_help("Selects the 1-based page of styles to print.")
        .value_parser(value_parser!(u64).range(1..))
        .default_value("1"),
    )
    .arg(
        arg!(-a --all "Prints every generated style")
        .conflicts_with_all(["limit", "page"]),
    )
    .arg(
        arg!(-f --format <PATTERN> "Output pattern of each style")
        .long_help(
            "Tera pattern used to print each style. The variables text, category, id and index \
                    are available, as well as the font(name=..) and surround(start=.., end=..) filters \
                    (defaults to the format value of the configuration).",
        ),
    )
    .arg(
        arg!(--json "Prints the selected styles as a JSON array")
        .conflicts_with("format"),
    )
    .arg(
        arg!(--seed <N> "Seed for a reproducible generation")
        .value_parser(value_parser!(u64)),
    )
    .arg(
        arg!(--config <PATH> "Uses an alternative configuration file")
        .long_help(
            "Reads the configuration from the given file instead of fancyname.toml in the \
                    configuration directory ($FANCYNAME_CONFIG_DIR). Environment variables and ~ are expanded.",
        )
        .global(true),
    )
    .subcommand(
        Command::new("fonts")
        .about("Lists the available fonts with a preview of the text.")
        .arg(arg!([text] ... "The text to preview")),
    )
    .subcommand(
        Command::new("categories")
        .about("Lists the style categories.")
        .long_about("Lists the style categories with the number of styles generated for each one."),
    )
    .subcommand(
        Command::new("symbols")
        .about("Lists the symbols available as custom prefix and suffix."),
    )
    .subcommand(
        Command::new("custom")
        .about("Previews the text with a font, a prefix and a suffix of your choice.")
        .arg(arg!([text] ... "The text to preview"))
        .arg(
            arg!(-F --font <FONT> "Font to apply")
            .long_help("Name of the font to apply (see the fonts subcommand). No font keeps the text as is."),
        )
        .arg(
            arg!(--prefix <SYMBOL> "Symbol placed before the text")
            .action(ArgAction::Set),
        )
        .arg(
            arg!(--suffix <SYMBOL> "Symbol placed after the text")
            .action(ArgAction::Set),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_app(false).debug_assert();
    }

    #[test]
    fn test_generate_args() {
        let matches = build_app(false)
            .try_get_matches_from(["fancyname", "-c", "gamer", "-n", "5", "--seed", "3", "Zed", "X"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("category").unwrap(), "gamer");
        assert_eq!(*matches.get_one::<u64>("limit").unwrap(), 5);
        assert_eq!(*matches.get_one::<u64>("page").unwrap(), 1);
        assert_eq!(*matches.get_one::<u64>("seed").unwrap(), 3);
        let text: Vec<&str> = matches
            .get_many::<String>("text")
            .unwrap()
            .map(String::as_str)
            .collect();
        assert_eq!(text, vec!["Zed", "X"]);
    }

    #[test]
    fn test_invalid_args() {
        assert!(build_app(false)
            .try_get_matches_from(["fancyname", "-p", "0"])
            .is_err());
        assert!(build_app(false)
            .try_get_matches_from(["fancyname", "--all", "-n", "4"])
            .is_err());
    }

    #[test]
    fn test_custom_subcommand() {
        let matches = build_app(false)
            .try_get_matches_from(["fancyname", "custom", "-F", "bold", "--prefix", "꧁", "Zed"])
            .unwrap();
        let (name, custom) = matches.subcommand().unwrap();
        assert_eq!(name, "custom");
        assert_eq!(custom.get_one::<String>("font").unwrap(), "bold");
        assert_eq!(custom.get_one::<String>("prefix").unwrap(), "꧁");
        assert!(custom.get_one::<String>("suffix").is_none());
    }
}
