//! Runs one parsed command against the backend selected at start.

use crate::{
    AppointmentCommands, AuthCommands, CliError, CliResult, Commands, FeedbackCommands,
    Identity, PetCommands, ResetCommands, UserCommands,
};

use vb_auth::{SessionFacade, SignupRequest};
use vb_config::Config;
use vb_core::{Appointment, AppointmentStatus, NewAppointment, NewFeedback, NewPet, PetUpdate, Role};
use vb_db::{
    Actor, AppointmentRepository, Backend, DashboardRepository, FeedbackRepository,
    MedicalRecordRepository, PasswordResetRepository, PetRepository, ProfileRepository,
    RowStore, ServiceRepository,
};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};

pub struct App {
    backend: Backend,
    facade: SessionFacade,
}

impl App {
    pub fn new(backend: Backend, facade: SessionFacade) -> Self {
        Self { backend, facade }
    }

    pub fn from_config(config: &Config) -> CliResult<Self> {
        let backend = Backend::from_config(config)?;
        let facade = SessionFacade::from_config(config, &backend)?;
        Ok(Self::new(backend, facade))
    }

    pub async fn run(&self, identity: &Identity, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Auth { action } => self.auth(action).await,
            Commands::Pet { action } => {
                let actor = self.require_actor(identity).await?;
                self.pet(&actor, action).await
            }
            Commands::Appointment { action } => {
                let actor = self.actor(identity).await?;
                self.appointment(actor.as_ref(), action).await
            }
            Commands::Services => {
                let services = ServiceRepository::new(self.store()).list().await?;
                to_json(&services)
            }
            Commands::Feedback { action } => {
                let actor = self.require_actor(identity).await?;
                self.feedback(&actor, action).await
            }
            Commands::Records { pet_id } => {
                let actor = self.require_actor(identity).await?;
                if PetRepository::new(self.store())
                    .find(&actor, &pet_id)
                    .await?
                    .is_none()
                {
                    return Ok(Value::Null);
                }
                let records = MedicalRecordRepository::new(self.store())
                    .list_for_pet(&pet_id)
                    .await?;
                to_json(&records)
            }
            Commands::Stats => {
                self.require_admin(identity, "viewing stats").await?;
                let stats = DashboardRepository::new(self.store()).stats().await?;
                to_json(&stats)
            }
            Commands::User { action } => {
                self.require_admin(identity, "user administration").await?;
                self.user(action).await
            }
            Commands::Reset { action } => {
                self.require_admin(identity, "password reset administration")
                    .await?;
                self.reset(action)
            }
        }
    }

    /// Ends any session opened for this invocation.
    pub async fn finish(&self) {
        if self.facade.current().await.is_some()
            && let Err(e) = self.facade.logout().await
        {
            debug!("Sign-out at exit failed: {e}");
        }
    }

    fn store(&self) -> Arc<dyn RowStore> {
        self.backend.store.clone()
    }

    /// Signs in when credentials are given, otherwise trusts `--user-id`
    /// and reads the role from that user's profile.
    async fn actor(&self, identity: &Identity) -> CliResult<Option<Actor>> {
        if let (Some(email), Some(password)) = (&identity.email, &identity.password) {
            let signed_in = self.facade.login(email, password).await?;
            return Ok(Some(Actor {
                user_id: signed_in.user_id().to_string(),
                role: signed_in.role(),
            }));
        }

        let Some(user_id) = identity.user_id.as_deref() else {
            return Ok(None);
        };
        let profile = ProfileRepository::new(self.store())
            .find_by_id(user_id)
            .await?;
        Ok(Some(match profile {
            Some(profile) => Actor::from(&profile),
            None => Actor::user(user_id),
        }))
    }

    async fn require_actor(&self, identity: &Identity) -> CliResult<Actor> {
        self.actor(identity).await?.ok_or_else(CliError::no_actor)
    }

    async fn require_admin(&self, identity: &Identity, action: &'static str) -> CliResult<Actor> {
        let actor = self.require_actor(identity).await?;
        if !actor.is_admin() {
            return Err(CliError::forbidden(action));
        }
        Ok(actor)
    }

    async fn auth(&self, action: AuthCommands) -> CliResult<Value> {
        match action {
            AuthCommands::Login { email, password } => {
                let signed_in = self.facade.login(&email, &password).await?;
                Ok(json!({
                    "userId": signed_in.user_id(),
                    "role": signed_in.role(),
                    "isAdmin": signed_in.is_admin(),
                    "profile": signed_in.profile,
                }))
            }
            AuthCommands::Signup {
                email,
                password,
                confirm_password,
                full_name,
            } => {
                let user_id = self
                    .facade
                    .signup(&SignupRequest {
                        email,
                        password,
                        confirm_password,
                        full_name,
                    })
                    .await?;
                Ok(json!({ "userId": user_id }))
            }
            AuthCommands::RequestReset { email } => {
                let ack = self.facade.request_password_reset(&email).await?;
                Ok(json!({ "message": ack.message }))
            }
            AuthCommands::CompleteReset {
                token,
                password,
                confirm_password,
            } => {
                self.facade
                    .complete_password_reset(&token, &password, &confirm_password)
                    .await?;
                Ok(json!({ "message": "Password updated." }))
            }
        }
    }

    async fn pet(&self, actor: &Actor, action: PetCommands) -> CliResult<Value> {
        let pets = PetRepository::new(self.store());
        match action {
            PetCommands::List { all } => {
                let list = if all {
                    if !actor.is_admin() {
                        return Err(CliError::forbidden("listing every pet"));
                    }
                    pets.list_all().await?
                } else {
                    pets.list_for_owner(&actor.user_id).await?
                };
                to_json(&list)
            }
            PetCommands::Get { id } => to_json(&pets.find(actor, &id).await?),
            PetCommands::Add {
                name,
                species,
                breed,
                gender,
                weight,
                birth_date,
                medical_history,
            } => {
                let pet = NewPet {
                    breed,
                    gender,
                    weight,
                    birth_date,
                    medical_history,
                    ..NewPet::new(name, species)
                };
                let created = pets.create(actor, &pet).await?;
                info!("Pet {} added for {}", created.id, actor.user_id);
                to_json(&created)
            }
            PetCommands::Update {
                id,
                name,
                species,
                breed,
                gender,
                weight,
                birth_date,
                medical_history,
            } => {
                let update = PetUpdate {
                    name,
                    species,
                    breed,
                    gender,
                    weight,
                    birth_date,
                    medical_history,
                };
                to_json(&pets.update(actor, &id, &update).await?)
            }
            PetCommands::Delete { id } => {
                let deleted = pets.delete(actor, &id).await?;
                Ok(json!({ "deleted": deleted }))
            }
            PetCommands::Age { id, on } => {
                let Some(pet) = pets.find(actor, &id).await? else {
                    return Ok(Value::Null);
                };
                let today = on.unwrap_or_else(|| Utc::now().date_naive());
                Ok(json!({
                    "petId": pet.id,
                    "name": pet.name,
                    "age": pet.age_on(today),
                }))
            }
        }
    }

    async fn appointment(&self, actor: Option<&Actor>, action: AppointmentCommands) -> CliResult<Value> {
        let appointments = AppointmentRepository::new(self.store());
        match action {
            AppointmentCommands::List { all, status } => {
                let actor = actor.ok_or_else(CliError::no_actor)?;
                let list = match (all, status) {
                    (false, None) => appointments.list_for_owner(&actor.user_id).await?,
                    (_, status) => {
                        if !actor.is_admin() {
                            return Err(CliError::forbidden("listing every appointment"));
                        }
                        match status {
                            Some(raw) => {
                                appointments
                                    .list_by_status(&AppointmentStatus::normalize(&raw))
                                    .await?
                            }
                            None => appointments.list_all().await?,
                        }
                    }
                };
                to_json(&list)
            }
            AppointmentCommands::Get { id } => {
                let actor = actor.ok_or_else(CliError::no_actor)?;
                to_json(&self.visible_appointment(actor, &id).await?)
            }
            AppointmentCommands::Book {
                service,
                date,
                time,
                pet_id,
                email,
                phone,
                notes,
            } => {
                if actor.is_none() && email.is_none() {
                    return Err(CliError::no_actor());
                }
                let booking = NewAppointment {
                    pet_id,
                    owner_id: actor.map(|a| a.user_id.clone()),
                    time_slot: time,
                    email,
                    phone,
                    notes,
                    ..NewAppointment::new(service, date)
                };
                let created = appointments.create(&booking).await?;
                info!("Appointment {} booked", created.id);
                to_json(&created)
            }
            AppointmentCommands::Upcoming => {
                admin_only(actor, "viewing upcoming appointments")?;
                to_json(&appointments.upcoming(Utc::now()).await?)
            }
            AppointmentCommands::Recent { limit } => {
                admin_only(actor, "viewing recent appointments")?;
                to_json(&appointments.recent(limit).await?)
            }
            AppointmentCommands::Status { id, status } => {
                let actor = actor.ok_or_else(CliError::no_actor)?;
                let status: AppointmentStatus = status.parse()?;
                if self.visible_appointment(actor, &id).await?.is_none() {
                    return Ok(Value::Null);
                }
                to_json(&appointments.update_status(&id, &status).await?)
            }
            AppointmentCommands::Notes { id, notes } => {
                let actor = actor.ok_or_else(CliError::no_actor)?;
                if self.visible_appointment(actor, &id).await?.is_none() {
                    return Ok(Value::Null);
                }
                to_json(&appointments.update_notes(&id, notes.as_deref()).await?)
            }
            AppointmentCommands::Delete { id } => {
                let actor = actor.ok_or_else(CliError::no_actor)?;
                let deleted = match self.visible_appointment(actor, &id).await? {
                    Some(_) => appointments.delete(&id).await?,
                    None => false,
                };
                Ok(json!({ "deleted": deleted }))
            }
        }
    }

    /// Admins see every appointment; everyone else only their own.
    async fn visible_appointment(&self, actor: &Actor, id: &str) -> CliResult<Option<Appointment>> {
        let found = AppointmentRepository::new(self.store()).find_by_id(id).await?;
        Ok(found.filter(|a| actor.is_admin() || a.belongs_to(&actor.user_id)))
    }

    async fn feedback(&self, actor: &Actor, action: FeedbackCommands) -> CliResult<Value> {
        let feedback = FeedbackRepository::new(self.store());
        match action {
            FeedbackCommands::Add {
                appointment_id,
                rating,
                comment,
            } => {
                if self
                    .visible_appointment(actor, &appointment_id)
                    .await?
                    .is_none()
                {
                    return Ok(Value::Null);
                }
                let created = feedback
                    .create(&NewFeedback {
                        user_id: actor.user_id.clone(),
                        appointment_id,
                        rating,
                        comment,
                    })
                    .await?;
                to_json(&created)
            }
            FeedbackCommands::Get { appointment_id } => {
                if self
                    .visible_appointment(actor, &appointment_id)
                    .await?
                    .is_none()
                {
                    return Ok(Value::Null);
                }
                to_json(&feedback.find_by_appointment(&appointment_id).await?)
            }
        }
    }

    async fn user(&self, action: UserCommands) -> CliResult<Value> {
        let profiles = ProfileRepository::new(self.store());
        match action {
            UserCommands::List => to_json(&profiles.list().await?),
            UserCommands::Role { id, role } => {
                let role: Role = role.parse()?;
                to_json(&profiles.update_role(&id, role).await?)
            }
            UserCommands::Delete { id } => {
                let deleted = profiles.delete(&id).await?;
                Ok(json!({ "deleted": deleted }))
            }
        }
    }

    fn reset(&self, action: ResetCommands) -> CliResult<Value> {
        let resets = PasswordResetRepository::new(self.backend.local.clone());
        match action {
            ResetCommands::List { email } => to_json(&resets.list(email.as_deref())),
            ResetCommands::Complete { id } => to_json(&resets.mark_completed(&id)?),
        }
    }
}

fn admin_only(actor: Option<&Actor>, action: &'static str) -> CliResult<()> {
    match actor {
        Some(actor) if actor.is_admin() => Ok(()),
        Some(_) => Err(CliError::forbidden(action)),
        None => Err(CliError::no_actor()),
    }
}

fn to_json<T: Serialize>(value: &T) -> CliResult<Value> {
    Ok(serde_json::to_value(value)?)
}
