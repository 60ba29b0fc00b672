//! Batched statements for the children of an aggregate.
//!
//! Every builder returns `None` for an empty batch; an empty `INSERT` or `UPDATE` is never
//! issued. Generated ids are paired with their rows by [`correlate`].

use brandhub_error::{storage::StorageError, StorageResult};
use brandhub_models::entities::prelude::{BrandContactActiveModel, BrandOwnerActiveModel};
use sea_orm::{
    sea_query::{CaseStatement, Expr, Query, UpdateStatement, ValueType},
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityName, EntityTrait, IdenStatic, Insert,
    IntoActiveModel, Iterable, ModelTrait, PrimaryKeyToColumn, Value,
};
use tracing::debug;

/// A join row tying one child to its parent brand.
pub trait LinkRow: ActiveModelTrait {
    fn link(parent_id: i32, child_id: i32) -> Self;
}

impl LinkRow for BrandContactActiveModel {
    fn link(parent_id: i32, child_id: i32) -> Self {
        BrandContactActiveModel {
            brand_id: ActiveValue::Set(parent_id),
            contact_id: ActiveValue::Set(child_id),
            ..Default::default()
        }
    }
}

impl LinkRow for BrandOwnerActiveModel {
    fn link(parent_id: i32, child_id: i32) -> Self {
        BrandOwnerActiveModel {
            brand_id: ActiveValue::Set(parent_id),
            owner_id: ActiveValue::Set(child_id),
            ..Default::default()
        }
    }
}

#[inline]
fn table_name<E: EntityTrait>() -> String {
    E::default().table_name().to_string()
}

#[inline]
fn primary_key<E: EntityTrait>() -> StorageResult<E::Column> {
    E::PrimaryKey::iter()
        .next()
        .map(|pk| pk.into_column())
        .ok_or_else(|| StorageError::EntityNotFound(format!("primary key of {}", table_name::<E>())))
}

/// One multi-row `INSERT` for `rows`.
pub fn build_insert<A>(rows: Vec<A>) -> Option<Insert<A>>
where
    A: ActiveModelTrait,
{
    if rows.is_empty() {
        return None;
    }
    Some(<A::Entity as EntityTrait>::insert_many(rows))
}

/// One `UPDATE` rewriting `rows[i]` onto the row whose primary key is `ids[i]`.
///
/// Each column set on every row becomes `col = CASE WHEN pk = id THEN v ... ELSE col END`;
/// columns set on no row are left alone. A column set on only some rows is rejected, as is
/// an id list whose length differs from the row count.
pub fn build_update<A>(rows: Vec<A>, ids: &[i32]) -> StorageResult<Option<UpdateStatement>>
where
    A: ActiveModelTrait,
{
    let entity = table_name::<A::Entity>();
    if rows.len() != ids.len() {
        return Err(StorageError::IdCountMismatch {
            entity,
            rows: rows.len(),
            ids: ids.len(),
        });
    }
    if rows.is_empty() {
        return Ok(None);
    }

    let pk = primary_key::<A::Entity>()?;
    let mut stmt = Query::update();
    stmt.table(<A::Entity as Default>::default().table_ref());

    let mut columns = 0usize;
    for col in <A::Entity as EntityTrait>::Column::iter() {
        if col.as_str() == pk.as_str() {
            continue;
        }
        let values: Vec<Value> = rows
            .iter()
            .filter_map(|row| match row.get(col) {
                ActiveValue::Set(v) => Some(v),
                _ => None,
            })
            .collect();
        if values.is_empty() {
            continue;
        }
        if values.len() != rows.len() {
            return Err(StorageError::PartialColumn {
                entity,
                column: col.as_str().to_string(),
            });
        }

        let case = ids
            .iter()
            .zip(values)
            .fold(CaseStatement::new(), |case, (id, v)| {
                case.case(Expr::col(pk).eq(*id), Expr::val(v))
            })
            .finally(Expr::col(col));
        stmt.value(col, case);
        columns += 1;
    }

    if columns == 0 {
        return Ok(None);
    }
    stmt.and_where(Expr::col(pk).is_in(ids.iter().copied()));
    Ok(Some(stmt))
}

/// One multi-row `INSERT` of join rows pairing `parent_id` with each child id.
pub fn build_link<A>(parent_id: i32, child_ids: &[i32]) -> Option<Insert<A>>
where
    A: LinkRow,
{
    build_insert(
        child_ids
            .iter()
            .map(|child_id| A::link(parent_id, *child_id))
            .collect(),
    )
}

/// Pair generated ids with the rows that produced them.
///
/// Ids come back from the store in sequence order, so sorting them ascending restores
/// insertion order. The result holds `(row index, id)` for every row.
pub fn correlate(entity: &str, rows: usize, mut ids: Vec<i32>) -> StorageResult<Vec<(usize, i32)>> {
    if rows != ids.len() {
        return Err(StorageError::IdCountMismatch {
            entity: entity.to_string(),
            rows,
            ids: ids.len(),
        });
    }
    ids.sort_unstable();
    if let Some(w) = ids.windows(2).find(|w| w[0] == w[1]) {
        return Err(StorageError::DuplicateId {
            entity: entity.to_string(),
            id: w[0],
        });
    }
    Ok(ids.into_iter().enumerate().collect())
}

/// Insert `rows` with `RETURNING` and hand back their ids, `ids[i]` belonging to `rows[i]`.
pub async fn insert_returning<A, C>(rows: Vec<A>, db: &C) -> StorageResult<Vec<i32>>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let entity = table_name::<A::Entity>();
    let count = rows.len();
    let Some(insert) = build_insert(rows) else {
        return Ok(Vec::new());
    };

    let pk = primary_key::<A::Entity>()?;
    let models = insert.exec_with_returning_many(db).await?;
    let ids = models
        .iter()
        .map(|model| {
            <i32 as ValueType>::try_from(model.get(pk))
                .map_err(|_| StorageError::EntityNotFound(format!("integer id of {entity}")))
        })
        .collect::<StorageResult<Vec<i32>>>()?;

    let pairs = correlate(&entity, count, ids)?;
    debug!(entity = %entity, rows = count, "Batch inserted");
    Ok(pairs.into_iter().map(|(_, id)| id).collect())
}

/// Execute a statement produced by [`build_update`].
pub async fn exec_update<C>(stmt: &UpdateStatement, db: &C) -> StorageResult<u64>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    Ok(db.execute(backend.build(stmt)).await?.rows_affected())
}
