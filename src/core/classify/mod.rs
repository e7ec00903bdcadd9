//! Call-site classification.
//!
//! Candidates from the syntax scan are resolved against the `ProjectIndex`
//! into `CallSite` values — the one immutable input all call-site rules fan
//! out from. A candidate that does not involve the localization surface
//! classifies to nothing and is never diagnosed.

use crate::core::data::Span;
use crate::core::semantics::ProjectIndex;
use crate::core::syntax::expr::{ArgExpr, Argument, Candidate, CandidateKind, literal_content};

/// Which generic translate surface a call goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericTarget {
    /// `Translator.Translate(manager, key, …)` — returns a string.
    Translate,
    /// `Translation.GetOrCreate(manager, key, …)` — returns a translation.
    GetOrCreate,
    /// `Accessor.ResourceManager.GetString(key, …)` / `.GetObject(key, …)`.
    ManagerLookup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallSiteKind {
    GenericTranslate {
        target: GenericTarget,
        arg_count: usize,
    },
    CustomTranslate,
    /// `Accessor.Member` used as a string outside `nameof`.
    ResourceMemberAccess { member: String },
}

/// Why a key argument is not a symbolic reference even though its shape is
/// recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonSymbolicReason {
    /// Member access that does not resolve to the accessor in scope.
    MemberAccess,
    /// `expr.ToString()` — stringifying an unrelated symbol never provides
    /// compile-time safety, even when the text coincides with a real key.
    Stringified,
}

/// The statically extracted key argument of a call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyArgument {
    /// A plain string literal.
    Literal { value: String, span: Span },
    /// `nameof(…)` — the key is the final identifier.
    NameOf { key: String, span: Span },
    /// Direct member access on the accessor itself — the key is the member.
    AccessorMember { key: String, span: Span },
    /// Recognized shape that is not a valid symbolic key.
    NonSymbolic { reason: NonSymbolicReason, span: Span },
    /// Unknown at analysis time; rules skip this call site.
    Dynamic,
}

impl KeyArgument {
    /// The key text, for the forms the rules trust.
    pub fn known_key(&self) -> Option<&str> {
        match self {
            KeyArgument::Literal { value, .. } => Some(value),
            KeyArgument::NameOf { key, .. } | KeyArgument::AccessorMember { key, .. } => Some(key),
            KeyArgument::NonSymbolic { .. } | KeyArgument::Dynamic => None,
        }
    }

    /// Span of the argument expression, when there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            KeyArgument::Literal { span, .. }
            | KeyArgument::NameOf { span, .. }
            | KeyArgument::AccessorMember { span, .. }
            | KeyArgument::NonSymbolic { span, .. } => Some(*span),
            KeyArgument::Dynamic => None,
        }
    }
}

/// A classified call site. Constructed fresh per analysis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub kind: CallSiteKind,
    /// Name of the accessor type in scope.
    pub accessor: String,
    pub key: KeyArgument,
    /// Whole invocation / member-access span.
    pub span: Span,
}

/// Classify one candidate. `None` means the candidate has nothing to do
/// with the localization surface.
pub fn classify(candidate: &Candidate, index: &ProjectIndex, source: &str) -> Option<CallSite> {
    match &candidate.kind {
        CandidateKind::Invocation { path, args, .. } => {
            classify_invocation(candidate, path, args, index, source)
        }
        CandidateKind::MemberPath {
            segments,
            segment_spans,
        } => classify_member_path(candidate, segments, segment_spans, index),
    }
}

fn classify_invocation(
    candidate: &Candidate,
    path: &[String],
    args: &[Argument],
    index: &ProjectIndex,
    source: &str,
) -> Option<CallSite> {
    // Generic translate: first argument is `Accessor.ResourceManager`.
    if index.is_generic_translate(path) && args.len() >= 2 {
        let accessor = resource_manager_accessor(&args[0], index)?;
        let target = if path.last().is_some_and(|m| m == "GetOrCreate") {
            GenericTarget::GetOrCreate
        } else {
            GenericTarget::Translate
        };
        let accessor = accessor.to_string();
        return Some(CallSite {
            kind: CallSiteKind::GenericTranslate {
                target,
                arg_count: args.len(),
            },
            key: key_argument(&args[1], &accessor, index, source),
            accessor,
            span: candidate.span,
        });
    }

    // Direct resource-manager lookup: `Accessor.ResourceManager.GetString(key)`.
    if path.len() >= 3
        && matches!(path[path.len() - 1].as_str(), "GetString" | "GetObject")
        && path[path.len() - 2] == "ResourceManager"
        && !args.is_empty()
        && let Some(accessor) = index.resolve_accessor(&path[..path.len() - 2])
    {
        let accessor = accessor.name.clone();
        return Some(CallSite {
            kind: CallSiteKind::GenericTranslate {
                target: GenericTarget::ManagerLookup,
                arg_count: args.len(),
            },
            key: key_argument(&args[0], &accessor, index, source),
            accessor,
            span: candidate.span,
        });
    }

    // Project wrapper: first argument is the key.
    if let Some(wrapper) = index.resolve_wrapper(path)
        && !args.is_empty()
    {
        let accessor = wrapper.accessor.clone();
        return Some(CallSite {
            kind: CallSiteKind::CustomTranslate,
            key: key_argument(&args[0], &accessor, index, source),
            accessor,
            span: candidate.span,
        });
    }

    None
}

fn classify_member_path(
    candidate: &Candidate,
    segments: &[String],
    segment_spans: &[Span],
    index: &ProjectIndex,
) -> Option<CallSite> {
    if candidate.in_nameof {
        return None;
    }
    let (accessor, consumed) = index.resolve_accessor_prefix(segments)?;
    if consumed >= segments.len() {
        return None;
    }
    let member = &segments[consumed];
    if member == "ResourceManager" || !accessor.has_member(member) {
        return None;
    }
    let span = Span::new(segment_spans[0].start, segment_spans[consumed].end);
    Some(CallSite {
        kind: CallSiteKind::ResourceMemberAccess {
            member: member.clone(),
        },
        accessor: accessor.name.clone(),
        key: KeyArgument::AccessorMember {
            key: member.clone(),
            span,
        },
        span,
    })
}

/// Resolve `Accessor.ResourceManager` (optionally namespace-qualified) out
/// of the first argument.
fn resource_manager_accessor<'a>(arg: &Argument, index: &'a ProjectIndex) -> Option<&'a str> {
    let ArgExpr::Path { segments, .. } = &arg.expr else {
        return None;
    };
    let (last, qualifier) = segments.split_last()?;
    if last != "ResourceManager" || qualifier.is_empty() {
        return None;
    }
    index.resolve_accessor(qualifier).map(|a| a.name.as_str())
}

/// Reduce an argument expression to its key form.
fn key_argument(arg: &Argument, accessor: &str, index: &ProjectIndex, source: &str) -> KeyArgument {
    match &arg.expr {
        ArgExpr::Str { token } => match literal_content(token, source) {
            Some(value) => KeyArgument::Literal {
                value,
                span: token.span,
            },
            None => KeyArgument::Dynamic,
        },
        ArgExpr::NameOf { path, span } => KeyArgument::NameOf {
            key: path.last().cloned().unwrap_or_default(),
            span: *span,
        },
        ArgExpr::Path { segments, span } => {
            if segments.len() < 2 {
                // A bare variable: nothing statically known.
                return KeyArgument::Dynamic;
            }
            match index.resolve_accessor_prefix(segments) {
                Some((resolved, consumed))
                    if resolved.name == accessor && consumed == segments.len() - 1 =>
                {
                    KeyArgument::AccessorMember {
                        key: segments[segments.len() - 1].clone(),
                        span: *span,
                    }
                }
                _ => KeyArgument::NonSymbolic {
                    reason: NonSymbolicReason::MemberAccess,
                    span: *span,
                },
            }
        }
        ArgExpr::Stringified { span } => KeyArgument::NonSymbolic {
            reason: NonSymbolicReason::Stringified,
            span: *span,
        },
        ArgExpr::Other { .. } => KeyArgument::Dynamic,
    }
}
