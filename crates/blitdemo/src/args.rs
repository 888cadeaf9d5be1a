#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    InvalidBool(String),
    InvalidNumber(String),
    MissingArg(String),
    UnknownFlag(String),
    UnexpectedArg(String),
}

impl core::fmt::Display for ArgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArgError::InvalidBool(arg) => write!(f, "Invalid boolean flag: {:?}", arg),
            ArgError::InvalidNumber(arg) => write!(f, "Invalid number: {:?}", arg),
            ArgError::MissingArg(flag) => write!(f, "Flag -{} is missing an argument", flag),
            ArgError::UnknownFlag(flag) => write!(f, "Unknown flag '-{}'", flag),
            ArgError::UnexpectedArg(arg) => write!(f, "Unexpected argument {:?}", arg),
        }
    }
}

impl core::error::Error for ArgError {}

/// Parse an inline boolean flag; true is `-c` or `-c=true`, false is `-c=false`
///
/// Also supports `yes` and `no` as alternatives to `true` and `false`.
pub fn parse_flag_optional_bool(value: Option<&str>) -> Result<bool, ArgError> {
    match value {
        None => Ok(true),
        Some("false" | "no") => Ok(false),
        Some("true" | "yes") => Ok(true),
        Some(s) => Err(ArgError::InvalidBool(s.into())),
    }
}

/// Parse a required parameter for an option, either inline or as the next arg
pub fn parse_param(
    flag: &str,
    args: &mut impl Iterator<Item = String>,
    inline: Option<&str>,
) -> Result<String, ArgError> {
    match inline {
        Some(v) => Ok(v.into()),
        None => args.next().ok_or_else(|| ArgError::MissingArg(flag.into())),
    }
}

/// Parse a required numeric parameter; `0x` prefixes are read as hex.
pub fn parse_number<T: TryFrom<u64>>(
    flag: &str,
    args: &mut impl Iterator<Item = String>,
    inline: Option<&str>,
) -> Result<T, ArgError> {
    let value = parse_param(flag, args, inline)?;
    let parsed = match value.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed
        .ok()
        .and_then(|n| T::try_from(n).ok())
        .ok_or(ArgError::InvalidNumber(value))
}

/// A simple command-line argument parser.
///
/// Flags (`-{flag}` or `-{flag}={inline}`) go to `handle_flag` along with
/// the arg iterator, so they can consume a following value, and the program
/// name. Everything else, and anything after `--`, goes to `handle_pos`.
/// Either handler may return `Ok(None)` to stop parsing early, e.g. after
/// printing `--help`.
pub fn parse_args<I, F, P, E>(
    mut args: I,
    mut handle_flag: F,
    mut handle_pos: P,
) -> Result<Option<()>, E>
where
    I: Iterator<Item = String>,
    F: FnMut(&str, Option<&str>, &mut I, &str) -> Result<Option<()>, E>,
    P: FnMut(usize, String) -> Result<Option<()>, E>,
{
    let mut in_flags = true;
    let mut pos_index = 0;
    let arg0 = args.next().unwrap_or_else(|| "unknown".into());

    while let Some(arg) = args.next() {
        if in_flags && arg.starts_with('-') {
            let (flag, inline) = arg[1..].split_once('=').unzip();
            let flag = flag.unwrap_or(&arg[1..]);

            if flag == "-" && inline.is_none() {
                in_flags = false;
            } else if handle_flag(flag, inline, &mut args, &arg0)?.is_none() {
                return Ok(None);
            }
        } else {
            if handle_pos(pos_index, arg)?.is_none() {
                return Ok(None);
            }
            pos_index += 1;
        }
    }

    Ok(Some(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> std::vec::IntoIter<String> {
        args.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_bool_flags() {
        assert_eq!(parse_flag_optional_bool(None), Ok(true));
        assert_eq!(parse_flag_optional_bool(Some("no")), Ok(false));
        assert_eq!(
            parse_flag_optional_bool(Some("maybe")),
            Err(ArgError::InvalidBool("maybe".into()))
        );
    }

    #[test]
    fn test_numbers() {
        let mut rest = strings(&["42", "0x10", "nope"]);
        assert_eq!(parse_number::<u64>("-seed", &mut rest, None), Ok(42));
        assert_eq!(parse_number::<usize>("-count", &mut rest, None), Ok(16));
        assert_eq!(
            parse_number::<usize>("-count", &mut rest, None),
            Err(ArgError::InvalidNumber("nope".into()))
        );
        assert_eq!(
            parse_number::<u64>("-seed", &mut rest, None),
            Err(ArgError::MissingArg("-seed".into()))
        );
        assert_eq!(parse_number::<u8>("-n", &mut rest, Some("7")), Ok(7));
        assert_eq!(
            parse_number::<u8>("-n", &mut rest, Some("300")),
            Err(ArgError::InvalidNumber("300".into()))
        );
    }

    #[test]
    fn test_parse_args_order() {
        let mut flags = Vec::new();
        let mut positional = Vec::new();
        let res = parse_args(
            strings(&["prog", "-a", "-b=1", "x", "--", "-c"]),
            |flag, inline, _, arg0| -> Result<_, ArgError> {
                assert_eq!(arg0, "prog");
                flags.push((flag.to_string(), inline.map(String::from)));
                Ok(Some(()))
            },
            |index, arg| {
                positional.push((index, arg));
                Ok(Some(()))
            },
        );
        assert_eq!(res, Ok(Some(())));
        assert_eq!(
            flags,
            [("a".to_string(), None), ("b".to_string(), Some("1".to_string()))]
        );
        assert_eq!(positional, [(0, "x".to_string()), (1, "-c".to_string())]);
    }
}
