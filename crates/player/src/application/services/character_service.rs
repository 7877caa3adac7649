//! Character Service - roster listing and every character mutation
//!
//! Mutations return nothing useful to the views on purpose: callers reload
//! the lists they display instead of patching local copies.

use roster_domain::{Character, CharacterId, CharacterState, SkillOptions, SkillSelection};

use crate::application::api::Api;
use crate::application::dto::{
    ChangeStateRequest, CharacterDto, CharacterPayload, ChooseSkillsRequest, SetOptionsRequest,
};
use crate::application::error::ClientError;
use crate::ports::outbound::ApiPort;

const CHARACTERS: &str = "/personajes/";
const AVAILABLE: &str = "/personajes/disponibles/";

fn character_path(id: CharacterId) -> String {
    format!("/personajes/{id}/")
}

fn action_path(id: CharacterId, action: &str) -> String {
    format!("/personajes/{id}/{action}/")
}

fn into_characters(dtos: Vec<CharacterDto>) -> Vec<Character> {
    dtos.into_iter().map(Into::into).collect()
}

#[derive(Clone)]
pub struct CharacterService {
    api: Api,
}

impl CharacterService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Full roster for a GM, own characters for a player.
    pub async fn list(&self) -> Result<Vec<Character>, ClientError> {
        let dtos: Vec<CharacterDto> = self.api.get(CHARACTERS).await?;
        Ok(into_characters(dtos))
    }

    /// Unowned characters.
    pub async fn available(&self) -> Result<Vec<Character>, ClientError> {
        let dtos: Vec<CharacterDto> = self.api.get(AVAILABLE).await?;
        Ok(into_characters(dtos))
    }

    pub async fn create(&self, payload: &CharacterPayload) -> Result<(), ClientError> {
        tracing::debug!(name = %payload.name, "creating character");
        self.api.post_no_response(CHARACTERS, payload).await?;
        Ok(())
    }

    pub async fn update(
        &self,
        id: CharacterId,
        payload: &CharacterPayload,
    ) -> Result<(), ClientError> {
        tracing::debug!(%id, "updating character");
        let _: serde_json::Value = self.api.patch(&character_path(id), payload).await?;
        Ok(())
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), ClientError> {
        tracing::debug!(%id, "deleting character");
        self.api.delete(&character_path(id)).await?;
        Ok(())
    }

    /// Player takes an unowned character.
    pub async fn claim(&self, id: CharacterId) -> Result<(), ClientError> {
        self.api.post_empty(&action_path(id, "elegir")).await?;
        Ok(())
    }

    /// GM sets the three offered skills; empty slots are sent as `null`.
    pub async fn set_options(
        &self,
        id: CharacterId,
        options: &SkillOptions,
    ) -> Result<(), ClientError> {
        let body = SetOptionsRequest::from(options);
        let _: serde_json::Value = self.api.patch(&action_path(id, "set-opciones"), &body).await?;
        Ok(())
    }

    /// Owning player saves exactly two of the offered skills.
    pub async fn choose_skills(
        &self,
        id: CharacterId,
        selection: &SkillSelection,
    ) -> Result<(), ClientError> {
        let body = ChooseSkillsRequest::from(selection);
        self.api
            .post_no_response(&action_path(id, "elegir-habilidades"), &body)
            .await?;
        Ok(())
    }

    pub async fn level_up(&self, id: CharacterId) -> Result<(), ClientError> {
        self.api.post_empty(&action_path(id, "subir_nivel")).await?;
        Ok(())
    }

    pub async fn change_state(
        &self,
        id: CharacterId,
        state: CharacterState,
    ) -> Result<(), ClientError> {
        let body = ChangeStateRequest { state };
        self.api
            .post_no_response(&action_path(id, "cambiar_estado"), &body)
            .await?;
        Ok(())
    }

    /// GM returns a character to the pool.
    pub async fn release(&self, id: CharacterId) -> Result<(), ClientError> {
        self.api.post_empty(&action_path(id, "liberar")).await?;
        Ok(())
    }
}
