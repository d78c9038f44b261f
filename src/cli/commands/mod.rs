use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    Command::new("pordego")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("PORDEGO_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("user-pool-id")
                .long("user-pool-id")
                .help("Identifier of the user pool accounts are created in")
                .env("PORDEGO_USER_POOL_ID")
                .required(true),
        )
        .arg(
            Arg::new("client-id")
                .long("client-id")
                .help("App client identifier used for password authentication")
                .env("PORDEGO_CLIENT_ID")
                .required(true),
        )
        .arg(
            Arg::new("provider-url")
                .long("provider-url")
                .help("Identity provider endpoint, example: https://cognito-idp.us-east-1.amazonaws.com")
                .env("PORDEGO_PROVIDER_URL")
                .required(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("PORDEGO_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "pordego");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_port_and_provider() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "pordego",
            "--port",
            "8080",
            "--user-pool-id",
            "us-east-1_9AbCdEfGh",
            "--client-id",
            "4client2id0example",
            "--provider-url",
            "https://cognito-idp.us-east-1.amazonaws.com",
        ]);

        assert_eq!(matches.get_one::<u16>("port").copied(), Some(8080));
        assert_eq!(
            matches
                .get_one::<String>("user-pool-id")
                .map(ToString::to_string),
            Some("us-east-1_9AbCdEfGh".to_string())
        );
        assert_eq!(
            matches
                .get_one::<String>("client-id")
                .map(ToString::to_string),
            Some("4client2id0example".to_string())
        );
        assert_eq!(
            matches
                .get_one::<String>("provider-url")
                .map(ToString::to_string),
            Some("https://cognito-idp.us-east-1.amazonaws.com".to_string())
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("PORDEGO_USER_POOL_ID", Some("us-east-1_9AbCdEfGh")),
                ("PORDEGO_CLIENT_ID", Some("4client2id0example")),
                (
                    "PORDEGO_PROVIDER_URL",
                    Some("https://cognito-idp.us-east-1.amazonaws.com"),
                ),
                ("PORDEGO_PORT", Some("443")),
                ("PORDEGO_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["pordego"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(443));
                assert_eq!(
                    matches
                        .get_one::<String>("user-pool-id")
                        .map(ToString::to_string),
                    Some("us-east-1_9AbCdEfGh".to_string())
                );
                assert_eq!(
                    matches
                        .get_one::<String>("provider-url")
                        .map(ToString::to_string),
                    Some("https://cognito-idp.us-east-1.amazonaws.com".to_string())
                );
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("PORDEGO_LOG_LEVEL", Some(level)),
                    ("PORDEGO_USER_POOL_ID", Some("us-east-1_9AbCdEfGh")),
                    ("PORDEGO_CLIENT_ID", Some("4client2id0example")),
                    (
                        "PORDEGO_PROVIDER_URL",
                        Some("https://cognito-idp.us-east-1.amazonaws.com"),
                    ),
                ],
                || {
                    let command = new();
                    let matches = command.get_matches_from(vec!["pordego"]);
                    assert_eq!(
                        matches.get_one::<u8>("verbosity").copied(),
                        Some(index as u8)
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("PORDEGO_LOG_LEVEL", None::<String>)], || {
                let mut args = vec![
                    "pordego".to_string(),
                    "--user-pool-id".to_string(),
                    "us-east-1_9AbCdEfGh".to_string(),
                    "--client-id".to_string(),
                    "4client2id0example".to_string(),
                    "--provider-url".to_string(),
                    "https://cognito-idp.us-east-1.amazonaws.com".to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
