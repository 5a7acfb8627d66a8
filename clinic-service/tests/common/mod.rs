use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use clinic_service::domain::animal::errors::AnimalError;
use clinic_service::domain::animal::models::Animal;
use clinic_service::domain::animal::models::AnimalId;
use clinic_service::domain::animal::ports::AnimalRepository;
use clinic_service::domain::animal::service::AnimalService;
use clinic_service::domain::treatment::errors::TreatmentError;
use clinic_service::domain::treatment::models::Treatment;
use clinic_service::domain::treatment::models::TreatmentId;
use clinic_service::domain::treatment::ports::TreatmentRepository;
use clinic_service::domain::treatment::service::TreatmentService;
use clinic_service::domain::vet::errors::VetError;
use clinic_service::domain::vet::models::Username;
use clinic_service::domain::vet::models::Vet;
use clinic_service::domain::vet::models::VetId;
use clinic_service::domain::vet::ports::VetRepository;
use clinic_service::domain::vet::service::VetService;
use clinic_service::inbound::http::router::create_router;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server backed by in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Authenticator,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let vet_service = Arc::new(VetService::new(Arc::new(InMemoryVetRepository::default())));
        let animal_service = Arc::new(AnimalService::new(Arc::new(
            InMemoryAnimalRepository::default(),
        )));
        let treatment_service = Arc::new(TreatmentService::new(Arc::new(
            InMemoryTreatmentRepository::default(),
        )));

        let authenticator = Arc::new(Authenticator::new(TEST_SECRET));

        let router = create_router(vet_service, animal_service, treatment_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator: Authenticator::new(TEST_SECRET),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a vet and return the `data` object of the response
    pub async fn register_vet(&self, username: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/vets/register")
            .json(&json!({
                "username": username,
                "email": format!("{}@clinic.example", username),
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"].clone()
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/vets/login")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a vet, log in and return the bearer token
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        self.register_vet(username, password).await;
        self.token_for(username, password).await
    }

    pub async fn token_for(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }

    /// Create an animal and return its id
    pub async fn create_animal(&self, token: &str, name: &str) -> String {
        let response = self
            .post_authenticated("/animals", token)
            .json(&json!({
                "name": name,
                "species": "Dog",
                "breed": "Lab",
                "owner": "Bob"
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_str().expect("Missing id").to_string()
    }
}

#[derive(Default)]
pub struct InMemoryVetRepository {
    vets: Mutex<HashMap<VetId, Vet>>,
}

#[async_trait]
impl VetRepository for InMemoryVetRepository {
    async fn create(&self, vet: Vet) -> Result<Vet, VetError> {
        let mut vets = self.vets.lock().unwrap();
        if vets.values().any(|v| v.username == vet.username) {
            return Err(VetError::UsernameAlreadyExists(vet.username.to_string()));
        }
        vets.insert(vet.id, vet.clone());
        Ok(vet)
    }

    async fn find_by_id(&self, id: &VetId) -> Result<Option<Vet>, VetError> {
        Ok(self.vets.lock().unwrap().get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Vet>, VetError> {
        Ok(self
            .vets
            .lock()
            .unwrap()
            .values()
            .find(|v| &v.username == username)
            .cloned())
    }

    async fn update(&self, vet: Vet) -> Result<Vet, VetError> {
        let mut vets = self.vets.lock().unwrap();
        match vets.get_mut(&vet.id) {
            Some(existing) => {
                *existing = vet.clone();
                Ok(vet)
            }
            None => Err(VetError::NotFound(vet.id.to_string())),
        }
    }

    async fn delete(&self, id: &VetId) -> Result<(), VetError> {
        self.vets.lock().unwrap().remove(id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAnimalRepository {
    animals: Mutex<HashMap<AnimalId, Animal>>,
}

#[async_trait]
impl AnimalRepository for InMemoryAnimalRepository {
    async fn create(&self, animal: Animal) -> Result<Animal, AnimalError> {
        self.animals
            .lock()
            .unwrap()
            .insert(animal.id, animal.clone());
        Ok(animal)
    }

    async fn find_by_id(&self, id: &AnimalId) -> Result<Option<Animal>, AnimalError> {
        Ok(self.animals.lock().unwrap().get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Animal>, AnimalError> {
        let mut animals: Vec<Animal> = self.animals.lock().unwrap().values().cloned().collect();
        animals.sort_by_key(|a| a.created_at);
        Ok(animals)
    }

    async fn update(&self, animal: Animal) -> Result<Animal, AnimalError> {
        let mut animals = self.animals.lock().unwrap();
        match animals.get_mut(&animal.id) {
            Some(existing) => {
                *existing = animal.clone();
                Ok(animal)
            }
            None => Err(AnimalError::NotFound(animal.id.to_string())),
        }
    }

    async fn delete(&self, id: &AnimalId) -> Result<(), AnimalError> {
        self.animals.lock().unwrap().remove(id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTreatmentRepository {
    treatments: Mutex<HashMap<TreatmentId, Treatment>>,
}

#[async_trait]
impl TreatmentRepository for InMemoryTreatmentRepository {
    async fn create(&self, treatment: Treatment) -> Result<Treatment, TreatmentError> {
        self.treatments
            .lock()
            .unwrap()
            .insert(treatment.id, treatment.clone());
        Ok(treatment)
    }

    async fn find_by_id(&self, id: &TreatmentId) -> Result<Option<Treatment>, TreatmentError> {
        Ok(self.treatments.lock().unwrap().get(id).cloned())
    }

    async fn find_by_animal(&self, animal_id: &AnimalId) -> Result<Vec<Treatment>, TreatmentError> {
        let mut treatments: Vec<Treatment> = self
            .treatments
            .lock()
            .unwrap()
            .values()
            .filter(|t| &t.animal_id == animal_id)
            .cloned()
            .collect();
        treatments.sort_by_key(|t| t.created_at);
        Ok(treatments)
    }

    async fn update(&self, treatment: Treatment) -> Result<Treatment, TreatmentError> {
        let mut treatments = self.treatments.lock().unwrap();
        match treatments.get_mut(&treatment.id) {
            Some(existing) => {
                *existing = treatment.clone();
                Ok(treatment)
            }
            None => Err(TreatmentError::NotFound(treatment.id.to_string())),
        }
    }

    async fn delete(&self, id: &TreatmentId) -> Result<(), TreatmentError> {
        self.treatments.lock().unwrap().remove(id);
        Ok(())
    }
}
