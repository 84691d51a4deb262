use tokio_postgres::Row;

// Type aliases for PostgreSQL parameter types
pub type PgParam = dyn tokio_postgres::types::ToSql + Sync;
pub type PgSendParam = dyn tokio_postgres::types::ToSql + Sync + Send;
pub type PgParamBox = Box<PgSendParam>;
pub type PgParamVec = Vec<PgParamBox>;

pub fn first_row_or_not_found<T, E, F>(
    rows: &[Row], mapper: F, not_found_error: E,
) -> Result<T, E>
where
    F: FnOnce(&Row) -> T,
{
    rows.first().map(mapper).ok_or(not_found_error)
}

pub fn param_refs(params: &PgParamVec) -> Vec<&PgParam> {
    params.iter().map(|p| p.as_ref() as &PgParam).collect()
}
