// src/services/room_service.rs

use sqlx::{Executor, PgPool, Postgres};

use crate::{
    common::error::AppError,
    db::RoomRepository,
    models::room::{Room, RoomType},
};

#[derive(Clone)]
pub struct RoomService {
    repo: RoomRepository,
}

impl RoomService {
    pub fn new(repo: RoomRepository) -> Self {
        Self { repo }
    }

    // =========================================================================
    //  ROOMS
    // =========================================================================

    pub async fn list_rooms<'e, E>(&self, executor: E) -> Result<Vec<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_rooms(executor).await
    }

    pub async fn get_room<'e, E>(&self, executor: E, id: i32) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo
            .find_room(executor, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found.".to_string()))
    }

    pub async fn create_room(&self, pool: &PgPool, mut room: Room) -> Result<Room, AppError> {
        if self.repo.find_room_type(pool, room.room_type_id).await?.is_none() {
            return Err(AppError::BadRequest("Room type not found.".to_string()));
        }

        room.id = 0;
        self.repo.create_room(pool, &mut room).await?;
        tracing::info!(room_id = room.id, room_number = %room.room_number, "Room created");
        Ok(room)
    }

    /// Rooms still referenced by bookings stay put (409).
    pub async fn delete_room<'e, E>(&self, executor: E, id: i32) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        match self.repo.delete_room(executor, id).await? {
            0 => Err(AppError::NotFound("Room not found.".to_string())),
            _ => Ok(()),
        }
    }

    // =========================================================================
    //  ROOM TYPES
    // =========================================================================

    pub async fn list_room_types<'e, E>(&self, executor: E) -> Result<Vec<RoomType>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        self.repo.list_room_types(executor).await
    }

    pub async fn create_room_type<'e, E>(&self, executor: E, mut room_type: RoomType) -> Result<RoomType, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        room_type.id = 0;
        self.repo.create_room_type(executor, &mut room_type).await?;
        Ok(room_type)
    }
}
