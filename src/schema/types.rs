/// Declared shape of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A scalar with its bare semantic type name, e.g. `"i64"`.
    Scalar(&'static str),
    /// A sequence with its element type name, e.g. `Sequence("String")`.
    Sequence(&'static str),
}

/// One field declaration inside a record schema.
///
/// Flags default to unset; builder-style setters flip them on.
#[derive(Debug, Clone)]
pub struct FieldDeclaration {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Serialization key: the wire name and the database column.
    pub key: &'static str,
    pub parameter: bool,
    pub required: bool,
    pub time: bool,
}

impl FieldDeclaration {
    pub fn new(name: &'static str, kind: FieldKind, key: &'static str) -> Self {
        Self {
            name,
            kind,
            key,
            parameter: false,
            required: false,
            time: false,
        }
    }

    /// The field is accepted as a request parameter.
    pub fn parameter(mut self) -> Self {
        self.parameter = true;
        self
    }

    /// The parameter must be present on create.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The column is a timestamp, surfaced to callers as unix seconds.
    pub fn time(mut self) -> Self {
        self.time = true;
        self
    }
}

/// Shape of a registered schema.
#[derive(Debug, Clone)]
pub enum SchemaKind {
    /// An entity record with its ordered field declarations.
    Record(Vec<FieldDeclaration>),
    /// A bare named type; the generator has nothing to derive from it.
    Scalar(&'static str),
}

/// A named entity description. Field order is significant and preserved
/// verbatim through every derived artifact.
#[derive(Debug, Clone)]
pub struct Schema {
    pub title: &'static str,
    pub kind: SchemaKind,
}

impl Schema {
    pub fn record(title: &'static str) -> Self {
        Self {
            title,
            kind: SchemaKind::Record(Vec::new()),
        }
    }

    pub fn scalar(title: &'static str, ty: &'static str) -> Self {
        Self {
            title,
            kind: SchemaKind::Scalar(ty),
        }
    }

    /// Append a field declaration; no-op for non-record schemas.
    pub fn field(mut self, decl: FieldDeclaration) -> Self {
        if let SchemaKind::Record(fields) = &mut self.kind {
            fields.push(decl);
        }
        self
    }
}
