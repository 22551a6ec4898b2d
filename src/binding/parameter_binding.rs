use smallvec::SmallVec;

use crate::descriptor::TypeDescriptor;

/// Everything needed to bind one declared handler parameter for one
/// incoming request.
///
/// Constructed by the extraction collaborator for each request, consumed
/// synchronously by [`bind`], and discarded afterwards; it is never retained
/// across requests. Raw values borrow from the request they were extracted
/// from.
///
/// [`bind`]: crate::binding::bind
#[derive(Debug, Clone)]
pub struct ParameterBinding<'request> {
    pub(super) target: TypeDescriptor,
    pub(super) raw_values: SmallVec<[&'request str; 1]>,
    pub(super) default: Option<&'request str>,
}

impl<'request> ParameterBinding<'request> {
    /// A binding for the given target type, with no raw values and no
    /// default.
    pub fn new(target: TypeDescriptor) -> Self {
        Self {
            target,
            raw_values: SmallVec::new(),
            default: None,
        }
    }

    /// Append one raw value.
    ///
    /// Values keep the collaborator's extraction order; they are never
    /// reordered or deduplicated.
    pub fn raw_value(mut self, raw: &'request str) -> Self {
        self.raw_values.push(raw);
        self
    }

    /// Append raw values, in order.
    pub fn raw_values<I>(mut self, raws: I) -> Self
    where
        I: IntoIterator<Item = &'request str>,
    {
        self.raw_values.extend(raws);
        self
    }

    /// Set the declaration-time default.
    ///
    /// The default is substituted only when the request supplied no raw
    /// value at all. An explicitly present value, including the empty
    /// string, always wins.
    pub fn default_value(mut self, default: &'request str) -> Self {
        self.default = Some(default);
        self
    }

    /// The declared target type.
    pub fn target(&self) -> TypeDescriptor {
        self.target
    }
}
