use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{model::date::format_date, types::Uuid};

#[cfg(feature = "backend")]
use {
    crate::model::LogFilter,
    exemplar::Model,
    rusqlite::Connection,
    sea_query::{
        enum_def, Alias, Expr, Func, Order, Query, SelectStatement, SimpleExpr, SqliteQueryBuilder,
    },
    sea_query_rusqlite::RusqliteBinder,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "backend", derive(Model))]
#[cfg_attr(feature = "backend", table("exercise"))]
#[cfg_attr(feature = "backend", check("../../../server/migrations/002-exercise/up.sql"))]
#[cfg_attr(feature = "backend", enum_def)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: f64,
    pub date: DateTime<Utc>,
}

/// A validated exercise that hasn't been assigned to a user yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExercise {
    pub description: String,
    pub duration: f64,
    pub date: DateTime<Utc>,
}

impl Exercise {
    pub fn new(user_id: Uuid, new_exercise: NewExercise) -> Self {
        let NewExercise {
            description,
            duration,
            date,
        } = new_exercise;

        Self {
            id: Uuid::new_v4(),
            user_id,
            description,
            duration,
            date,
        }
    }

    pub fn display_date(&self) -> String {
        format_date(&self.date)
    }
}

// Compares stored and bound timestamps as julian day numbers so the text
// representation of either side doesn't matter
#[cfg(feature = "backend")]
fn julianday<T: Into<SimpleExpr>>(value: T) -> SimpleExpr {
    Func::cust(Alias::new("julianday")).arg(value).into()
}

#[cfg(feature = "backend")]
impl Exercise {
    fn select_star() -> SelectStatement {
        Query::select()
            .columns([
                ExerciseIden::Id,
                ExerciseIden::UserId,
                ExerciseIden::Description,
                ExerciseIden::Duration,
                ExerciseIden::Date,
            ])
            .from(ExerciseIden::Table)
            .to_owned()
    }

    pub fn fetch_by_id(conn: &Connection, id: &Uuid) -> Result<Exercise, rusqlite::Error> {
        let (sql, values) = Self::select_star()
            .and_where(Expr::col(ExerciseIden::Id).eq(id))
            .limit(1)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt.query_row(&*values.as_params(), Exercise::from_row)?;
        Ok(res)
    }

    pub fn fetch_ids_by_user(conn: &Connection, user_id: &Uuid) -> Result<Vec<Uuid>, rusqlite::Error> {
        let (sql, values) = Query::select()
            .column(ExerciseIden::Id)
            .from(ExerciseIden::Table)
            .and_where(Expr::col(ExerciseIden::UserId).eq(user_id))
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), |row| row.get(0))?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }

    /// A user's exercises between the (inclusive) bounds of the filter, in
    /// the order they were added
    pub fn fetch_log(
        conn: &Connection,
        user_id: &Uuid,
        filter: &LogFilter,
    ) -> Result<Vec<Exercise>, rusqlite::Error> {
        let mut query = Self::select_star();
        query.and_where(Expr::col(ExerciseIden::UserId).eq(user_id));

        if let Some(from) = filter.from {
            query.and_where(
                Expr::expr(julianday(Expr::col(ExerciseIden::Date))).gte(julianday(from)),
            );
        }
        if let Some(to) = filter.to {
            query.and_where(
                Expr::expr(julianday(Expr::col(ExerciseIden::Date))).lte(julianday(to)),
            );
        }

        query.order_by_expr(Expr::cust("rowid"), Order::Asc);

        if let Some(limit) = filter.limit {
            query.limit(limit);
        }

        let (sql, values) = query.build_rusqlite(SqliteQueryBuilder);

        let mut stmt = conn.prepare_cached(&sql)?;
        let res = stmt
            .query_map(&*values.as_params(), Exercise::from_row)?
            .collect::<Result<_, _>>()?;
        Ok(res)
    }
}
