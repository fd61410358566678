use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("could not write {table}: {source}")]
    Io {
        table: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
