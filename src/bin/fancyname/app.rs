use std::io::{IsTerminal, Write};

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use fancyname::{
    category::StyleCategory,
    config::MainConfig,
    constants::generation::DEFAULT_TEXT,
    controller::{GenerateRequest, StylesController},
    custom::CustomStyle,
    error::*,
};

pub struct App {
    pub matches: ArgMatches,
    interactive_output: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
            interactive_output,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Joins the words of the text argument, falling back to the default text
    fn text(matches: &ArgMatches) -> String {
        matches
            .get_many::<String>("text")
            .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
            .unwrap_or_else(|| DEFAULT_TEXT.to_string())
    }

    /// Translates the command line arguments into a generation request, using the
    /// configuration values for everything not supplied.
    ///
    /// # Returns
    /// A `Result` containing the request.
    fn build_request(&self, config: &MainConfig) -> Result<GenerateRequest> {
        let category = self
            .matches
            .get_one::<String>("category")
            .map(|c| c.parse::<StyleCategory>())
            .transpose()?;

        let limit = if self.matches.get_flag("all") {
            None
        } else {
            let limit = self
                .matches
                .get_one::<u64>("limit")
                .map_or(Ok(config.defaults.page_size), |n| to_usize("limit", *n))?;
            Some(limit)
        };

        let page = self
            .matches
            .get_one::<u64>("page")
            .map_or(Ok(1), |n| to_usize("page", *n))?;

        Ok(GenerateRequest {
            text: Self::text(&self.matches),
            category,
            page,
            limit,
            format: self
                .matches
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| config.defaults.format.clone()),
            json: self.matches.get_flag("json"),
            seed: self.matches.get_one::<u64>("seed").copied(),
            summary: self.interactive_output,
        })
    }

    /// Builds the custom style from the subcommand arguments, using the configured
    /// prefix and suffix when not supplied
    fn build_custom(config: &MainConfig, args: &ArgMatches) -> CustomStyle {
        let defaults = CustomStyle::from_config(config);
        CustomStyle {
            font: args.get_one::<String>("font").cloned(),
            prefix: args
                .get_one::<String>("prefix")
                .cloned()
                .unwrap_or(defaults.prefix),
            suffix: args
                .get_one::<String>("suffix")
                .cloned()
                .unwrap_or(defaults.suffix),
        }
    }

    /// Start the application, bootstraps the configuration and forwards the request to the controller.
    ///
    /// # Returns
    /// A `Result` indicating whether anything was printed.
    pub fn start(&self) -> Result<bool> {
        let bootstrap = BootStrap::new(self.matches.get_one::<String>("config").map(String::as_str))?;
        let config = bootstrap.get_config();
        let controller = StylesController::new(config)?;

        let stdout = std::io::stdout();
        let mut output = stdout.lock();

        let result = match self.matches.subcommand() {
            Some(("fonts", args)) => controller.list_fonts(&Self::text(args), &mut output),
            Some(("categories", _)) => controller.list_categories(&mut output),
            Some(("symbols", _)) => controller.list_symbols(&mut output),
            Some(("custom", args)) => controller.custom(
                &Self::build_custom(config, args),
                &Self::text(args),
                &mut output,
            ),
            _ => controller.generate(&self.build_request(config)?, &mut output),
        }?;

        output.flush()?;
        Ok(result)
    }
}

fn to_usize(name: &str, value: u64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        Error::ArgsProcessingError(format!("Invalid {} supplied \"{}\"", name, value))
    })
}
