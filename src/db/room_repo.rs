// src/db/room_repo.rs

use sqlx::{Executor, Postgres};

use crate::{
    common::{db_utils::conflict_on_constraint, error::AppError},
    db::active_record,
    models::room::{Room, RoomType},
};

#[derive(Clone, Default)]
pub struct RoomRepository;

impl RoomRepository {
    pub fn new() -> Self {
        Self
    }

    // =========================================================================
    //  ROOMS
    // =========================================================================

    pub async fn list_rooms<'e, E>(&self, executor: E) -> Result<Vec<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::all(executor).await?)
    }

    pub async fn find_room<'e, E>(&self, executor: E, id: i32) -> Result<Option<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::find(executor, id).await?)
    }

    /// A duplicate room number comes back as `Conflict` and nothing is inserted.
    pub async fn create_room<'e, E>(&self, executor: E, room: &mut Room) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let room_number = room.room_number.clone();
        active_record::insert(executor, room).await.map_err(|e| {
            conflict_on_constraint(e, || format!("Room number '{}' already exists.", room_number))
        })
    }

    /// Fails with `Conflict` while bookings still reference the room.
    pub async fn delete_room<'e, E>(&self, executor: E, id: i32) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        active_record::delete::<Room, _>(executor, id)
            .await
            .map_err(|e| conflict_on_constraint(e, || "Room has existing bookings and cannot be deleted.".to_string()))
    }

    // =========================================================================
    //  ROOM TYPES
    // =========================================================================

    pub async fn list_room_types<'e, E>(&self, executor: E) -> Result<Vec<RoomType>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::all(executor).await?)
    }

    pub async fn find_room_type<'e, E>(&self, executor: E, id: i32) -> Result<Option<RoomType>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::find(executor, id).await?)
    }

    pub async fn create_room_type<'e, E>(&self, executor: E, room_type: &mut RoomType) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        Ok(active_record::insert(executor, room_type).await?)
    }
}
