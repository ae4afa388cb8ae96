/// The six generated layers, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Api,
    Model,
    Entity,
    Store,
    Postgres,
    Bll,
}

impl Layer {
    pub const ALL: [Layer; 6] = [
        Layer::Api,
        Layer::Model,
        Layer::Entity,
        Layer::Store,
        Layer::Postgres,
        Layer::Bll,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Layer::Api => "api",
            Layer::Model => "model",
            Layer::Entity => "entity",
            Layer::Store => "store",
            Layer::Postgres => "postgres",
            Layer::Bll => "bll",
        }
    }

    /// Template file name under a templates directory.
    pub fn template_file(self) -> &'static str {
        match self {
            Layer::Api => "api.rs.txt",
            Layer::Model => "model.rs.txt",
            Layer::Entity => "entity.rs.txt",
            Layer::Store => "store.rs.txt",
            Layer::Postgres => "postgres.rs.txt",
            Layer::Bll => "bll.rs.txt",
        }
    }

    /// Built-in template source, compiled into the binary.
    pub fn builtin_template(self) -> &'static str {
        match self {
            Layer::Api => include_str!("../../templates/api.rs.txt"),
            Layer::Model => include_str!("../../templates/model.rs.txt"),
            Layer::Entity => include_str!("../../templates/entity.rs.txt"),
            Layer::Store => include_str!("../../templates/store.rs.txt"),
            Layer::Postgres => include_str!("../../templates/postgres.rs.txt"),
            Layer::Bll => include_str!("../../templates/bll.rs.txt"),
        }
    }

    /// Default output directory, relative to the output root.
    pub fn default_dir(self) -> &'static str {
        match self {
            Layer::Api => "src/api",
            Layer::Model => "src/model",
            Layer::Entity => "src/model/entity",
            Layer::Store => "src/store",
            Layer::Postgres => "src/store/postgres",
            Layer::Bll => "src/bll",
        }
    }
}
