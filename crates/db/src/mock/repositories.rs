use agenda_core::{models::appointment::Appointment, ports::AppointmentStore};
use async_trait::async_trait;
use mockall::mock;

// Mock store for testing
mock! {
    pub AppointmentStore {}

    #[async_trait]
    impl AppointmentStore for AppointmentStore {
        async fn list_appointments(&self) -> eyre::Result<Vec<Appointment>>;
    }
}
