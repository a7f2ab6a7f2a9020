use crate::parser::error::{ParseError, ParseErrorKind, convert_pest_error};
use crate::parser::parsed_sig::{Constraint, SigEntry, Signature, Span};
use crate::types::strip_namespace;
use crate::{Box, ToString, Vec, vec};
use pest::Parser;
use pest::iterators::{Pair, Pairs};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "parser/signature.pest"]
pub struct SignatureParser;

/// Parses a signature string into its AST.
pub fn parse(source: &str) -> Result<Signature, ParseError> {
    let mut pairs = SignatureParser::parse(Rule::signature, source)
        .map_err(|err| convert_pest_error(err, source))?;
    let signature = next_pair(&mut pairs, source.len())?;
    build_signature(signature)
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, at: usize) -> Result<Pair<'i, Rule>, ParseError> {
    pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            Span::new(at, at),
        )
    })
}

fn build_signature(pair: Pair<'_, Rule>) -> Result<Signature, ParseError> {
    let end = pair.as_span().end();
    let mut inner = pair.into_inner();
    let name = next_pair(&mut inner, end)?.as_str().into();
    let decl = next_pair(&mut inner, end)?;

    let mut constraints = Vec::new();
    let mut entries = Vec::new();
    for p in decl.into_inner() {
        match p.as_rule() {
            Rule::constraints => {
                for c in p.into_inner() {
                    let at = c.as_span().end();
                    let mut parts = c.into_inner();
                    let class = next_pair(&mut parts, at)?.as_str().into();
                    let var = next_pair(&mut parts, at)?.as_str().into();
                    constraints.push(Constraint { class, var });
                }
            }
            Rule::chain => {
                let (chain, has_wave) = build_chain(p)?;
                entries = if has_wave {
                    vec![SigEntry::Method(chain)]
                } else {
                    chain
                };
            }
            _ => unreachable!("unexpected rule in decl: {:?}", p.as_rule()),
        }
    }

    Ok(Signature {
        name,
        constraints,
        entries,
    })
}

// Returns the chain's entries plus whether a `~>` separator occurred.
fn build_chain(pair: Pair<'_, Rule>) -> Result<(Vec<SigEntry>, bool), ParseError> {
    let mut entries = Vec::new();
    let mut has_wave = false;
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::arrow => {}
            Rule::wave => has_wave = true,
            _ => entries.push(build_entry(p)?),
        }
    }
    Ok((entries, has_wave))
}

// A nested chain collapses to its single entry, or wraps in a function
// (or method) node.
fn chain_entry(pair: Pair<'_, Rule>) -> Result<SigEntry, ParseError> {
    let (mut entries, has_wave) = build_chain(pair)?;
    if has_wave {
        Ok(SigEntry::Method(entries))
    } else if entries.len() == 1 {
        Ok(entries.pop().expect("length checked above"))
    } else {
        Ok(SigEntry::Function(entries))
    }
}

fn build_entry(pair: Pair<'_, Rule>) -> Result<SigEntry, ParseError> {
    match pair.as_rule() {
        Rule::ident => Ok(ident_entry(pair.as_str())),

        Rule::application => {
            let span = Span::from(pair.as_span());
            let at = pair.as_span().end();
            let mut inner = pair.into_inner();
            let head = next_pair(&mut inner, at)?.as_str();
            let mut args = Vec::new();
            for p in inner {
                args.push(build_entry(p)?);
            }
            if is_constructor_name(head) {
                Ok(SigEntry::Constructor {
                    name: head.into(),
                    args,
                })
            } else if args.len() == 1 {
                Ok(SigEntry::Constrained {
                    var: head.into(),
                    arg: Box::new(args.pop().expect("length checked above")),
                })
            } else {
                // `f a b` has no reading: constrained variables are unary.
                Err(ParseError::new(
                    ParseErrorKind::ConstrainedArity {
                        var: head.to_string(),
                        got: args.len(),
                    },
                    span,
                ))
            }
        }

        Rule::thunk => Ok(SigEntry::Thunk),

        Rule::group => {
            let at = pair.as_span().end();
            let mut inner = pair.into_inner();
            chain_entry(next_pair(&mut inner, at)?)
        }

        Rule::list => {
            let at = pair.as_span().end();
            let mut inner = pair.into_inner();
            let elem = chain_entry(next_pair(&mut inner, at)?)?;
            Ok(SigEntry::List(Box::new(elem)))
        }

        Rule::record => {
            let mut fields = Vec::new();
            for field in pair.into_inner() {
                let at = field.as_span().end();
                let mut inner = field.into_inner();
                let name = next_pair(&mut inner, at)?.as_str().into();
                let value = chain_entry(next_pair(&mut inner, at)?)?;
                fields.push((name, value));
            }
            Ok(SigEntry::Record(fields))
        }

        rule => Err(ParseError::new(
            ParseErrorKind::Other {
                message: crate::format!("unhandled rule: {:?}", rule),
            },
            Span::from(pair.as_span()),
        )),
    }
}

fn ident_entry(text: &str) -> SigEntry {
    if is_constructor_name(text) {
        SigEntry::Constructor {
            name: text.into(),
            args: Vec::new(),
        }
    } else {
        SigEntry::Var(text.into())
    }
}

// Types are by convention capitalized; the namespace prefix does not count.
fn is_constructor_name(text: &str) -> bool {
    strip_namespace(text)
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
}
