use cssparser::{Delimiter, ParseError, Parser, ParserInput, Token};

use crate::{
    ast::{CssRule, Declaration, MediaRule, OtherRule, StyleRule, Stylesheet},
    Options,
};

/// Parse CSS source into a typed rule sequence.
///
/// The parser recovers from malformed rules: each one is reported through
/// the configured [`Logger`](crate::Logger) (unless `quiet` is set) and
/// skipped, and parsing continues with the next rule. Declaration values and
/// rule preludes are kept as raw source slices.
pub(crate) fn parse_stylesheet_source(css: &str, options: &Options) -> Stylesheet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    Stylesheet {
        rules: parse_rule_list(&mut parser, options),
    }
}

fn parse_rule_list<'i>(parser: &mut Parser<'i, '_>, options: &Options) -> Vec<CssRule> {
    let mut rules = Vec::new();

    while !parser.is_exhausted() {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        match parse_rule(parser, options) {
            Ok(rule) => rules.push(rule),
            Err(e) => {
                if !options.quiet {
                    options
                        .logger
                        .warn(e.location, &format!("skipped invalid rule: {:?}", e.kind));
                }
                recover_to_next_rule(parser);
            }
        }
    }

    rules
}

fn parse_rule<'i>(
    parser: &mut Parser<'i, '_>,
    options: &Options,
) -> Result<CssRule, ParseError<'i, ()>> {
    // try_parse restores the position on error, so a non-at-rule falls
    // through to the style rule branch below
    if let Ok(rule) = parser.try_parse(|p| match p.next()?.clone() {
        Token::AtKeyword(keyword) => {
            let name = keyword.to_ascii_lowercase();
            if name == "media" {
                parse_media_rule(p, options).map(CssRule::Media)
            } else {
                skip_at_rule(p);
                Ok(CssRule::Other(OtherRule { name }))
            }
        }
        _ => Err(p.new_custom_error(())),
    }) {
        return Ok(rule);
    }

    parse_style_rule(parser).map(CssRule::Style)
}

fn parse_media_rule<'i>(
    parser: &mut Parser<'i, '_>,
    options: &Options,
) -> Result<MediaRule, ParseError<'i, ()>> {
    parser.skip_whitespace();
    let start = parser.position();
    parser.parse_until_before(Delimiter::CurlyBracketBlock, |p| {
        while !p.is_exhausted() {
            p.next_including_whitespace()?;
        }
        Ok::<(), ParseError<'i, ()>>(())
    })?;
    let condition = parser.slice_from(start).trim().to_owned();

    parser.expect_curly_bracket_block()?;
    let rules =
        parser.parse_nested_block(|p| Ok::<_, ParseError<'i, ()>>(parse_rule_list(p, options)))?;

    Ok(MediaRule { condition, rules })
}

fn parse_style_rule<'i>(parser: &mut Parser<'i, '_>) -> Result<StyleRule, ParseError<'i, ()>> {
    let start = parser.position();
    parser.parse_until_before(Delimiter::CurlyBracketBlock, |p| {
        while !p.is_exhausted() {
            p.next_including_whitespace()?;
        }
        Ok::<(), ParseError<'i, ()>>(())
    })?;

    let selector = parser.slice_from(start).trim().to_owned();
    if selector.is_empty() {
        return Err(parser.new_custom_error(()));
    }

    parser.expect_curly_bracket_block()?;
    let declarations =
        parser.parse_nested_block(|p| Ok::<_, ParseError<'i, ()>>(parse_declaration_list(p)))?;

    Ok(StyleRule {
        selector,
        declarations,
    })
}

fn parse_declaration_list<'i>(parser: &mut Parser<'i, '_>) -> Vec<Declaration> {
    let mut declarations = Vec::new();

    while !parser.is_exhausted() {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }
        if let Some(declaration) = parse_declaration(parser) {
            declarations.push(declaration);
        }
    }

    declarations
}

fn parse_declaration<'i>(parser: &mut Parser<'i, '_>) -> Option<Declaration> {
    let name = match parser.expect_ident() {
        Ok(ident) => ident.to_string(),
        Err(..) => {
            skip_to_semicolon(parser);
            return None;
        }
    };

    if parser.expect_colon().is_err() {
        skip_to_semicolon(parser);
        return None;
    }

    parser.skip_whitespace();
    let start = parser.position();
    let mut important = false;

    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(..) => break,
            Ok(Token::Delim('!')) => {
                if parser
                    .try_parse(|p| p.expect_ident_matching("important"))
                    .is_ok()
                {
                    important = true;
                }
                break;
            }
            Ok(Token::Function(..) | Token::ParenthesisBlock | Token::SquareBracketBlock) => {
                let _: Result<(), ParseError<'i, ()>> = parser.parse_nested_block(|p| {
                    while !p.is_exhausted() {
                        let _ = p.next();
                    }
                    Ok(())
                });
            }
            Ok(..) => {}
        }
    }

    let raw = parser.slice_from(start);
    let value = if important {
        raw.rsplit_once("!important").map_or(raw, |(before, _)| before)
    } else {
        raw
    };
    let value = value.trim_end_matches(';').trim_end().to_owned();
    if value.is_empty() {
        return None;
    }

    Some(Declaration {
        name,
        value,
        important,
    })
}

/// Skip tokens until we hit a semicolon
///
/// Used to resync the declaration list after a malformed declaration, and
/// to consume the semicolon left over after an `!important` value.
fn skip_to_semicolon(parser: &mut Parser<'_, '_>) {
    while !parser.is_exhausted() {
        match parser.next() {
            Ok(Token::Semicolon) | Err(..) => break,
            _ => continue,
        }
    }
}

/// Consume an unhandled at-rule: everything up to and including either its
/// terminating semicolon or its block.
fn skip_at_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                let _: Result<(), ParseError<()>> = parser.parse_nested_block(|_| Ok(()));
                break;
            }
            Ok(Token::Semicolon) | Err(..) => break,
            Ok(..) => continue,
        }
    }
}

/// Recover from a malformed rule by skipping to the end of its block.
fn recover_to_next_rule(parser: &mut Parser<'_, '_>) {
    while !parser.is_exhausted() {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                let _: Result<(), ParseError<()>> = parser.parse_nested_block(|_| Ok(()));
                break;
            }
            Ok(Token::ParenthesisBlock | Token::SquareBracketBlock) => {
                let _: Result<(), ParseError<()>> = parser.parse_nested_block(|_| Ok(()));
            }
            _ => {}
        }
    }
}
