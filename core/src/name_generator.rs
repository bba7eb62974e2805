//! Deterministic customer name and address generation using curated lists.
//!
//! Names follow the Mexican convention of one given name plus paternal
//! and maternal surnames. Same RNG seed = same names and addresses.

use crate::rng::MockRng;

/// Deterministic name generator using curated name lists
pub struct NameGenerator;

impl NameGenerator {
    /// Generate a full name (given name + two surnames) deterministically
    pub fn generate_full_name(rng: &mut MockRng) -> String {
        let first_name = Self::generate_first_name(rng);
        let paternal = Self::generate_last_name(rng);
        let maternal = Self::generate_last_name(rng);
        format!("{} {} {}", first_name, paternal, maternal)
    }

    pub fn generate_first_name(rng: &mut MockRng) -> &'static str {
        *rng.pick_one(Self::first_names())
    }

    pub fn generate_last_name(rng: &mut MockRng) -> &'static str {
        *rng.pick_one(Self::last_names())
    }

    /// Generate a full street address:
    /// "Av. Juárez 123, Col. Centro, C.P. 06000, Ciudad de México, CDMX"
    pub fn generate_address(rng: &mut MockRng) -> String {
        let street = rng.pick_one(Self::streets());
        let number = rng.int_in_range(1, 4_999);
        let colonia = rng.pick_one(Self::colonias());
        let postal_code = rng.numeric_string(5);
        let (city, state) = rng.pick_one(Self::cities());
        format!("{street} {number}, Col. {colonia}, C.P. {postal_code}, {city}, {state}")
    }

    fn first_names() -> &'static [&'static str] {
        &[
            // Male names
            "José", "Juan", "Luis", "Carlos", "Jorge", "Miguel", "Francisco", "Alejandro",
            "Fernando", "Ricardo", "Eduardo", "Roberto", "Daniel", "Sergio", "Arturo",
            "Javier", "Raúl", "Manuel", "Antonio", "Pedro", "Héctor", "Mario", "Óscar",
            "Alberto", "Enrique", "Rafael", "Andrés", "Diego", "Santiago", "Emiliano",
            "Mateo", "Sebastián", "Leonardo", "Gerardo", "Guillermo", "Rodrigo",
            // Female names
            "María", "Guadalupe", "Juana", "Margarita", "Verónica", "Leticia", "Rosa",
            "Patricia", "Elizabeth", "Alejandra", "Gabriela", "Adriana", "Claudia",
            "Mónica", "Laura", "Ana", "Sofía", "Valentina", "Regina", "Ximena",
            "Camila", "Fernanda", "Daniela", "Mariana", "Andrea", "Lucía", "Paola",
            "Diana", "Karla", "Carmen", "Teresa", "Silvia", "Isabel", "Natalia",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Hernández", "García", "Martínez", "López", "González", "Pérez", "Rodríguez",
            "Sánchez", "Ramírez", "Cruz", "Flores", "Gómez", "Morales", "Vázquez",
            "Reyes", "Jiménez", "Torres", "Díaz", "Gutiérrez", "Ruiz", "Mendoza",
            "Aguilar", "Ortiz", "Moreno", "Castillo", "Romero", "Álvarez", "Méndez",
            "Chávez", "Rivera", "Juárez", "Ramos", "Domínguez", "Herrera", "Medina",
            "Castro", "Vargas", "Guzmán", "Velázquez", "Muñoz", "Rojas", "Contreras",
            "Salazar", "Luna", "Ortega", "Santiago", "Guerrero", "Estrada", "Bautista",
            "Cortés", "Soto", "Alvarado", "Espinoza", "Lara", "Ávila", "Ríos", "Cervantes",
            "Silva", "Delgado", "Vega", "Márquez", "Sandoval", "Fernández", "León",
            "Carrillo", "Mejía", "Solís", "Núñez", "Rosas", "Valdez", "Ibarra", "Campos",
        ]
    }

    fn streets() -> &'static [&'static str] {
        &[
            "Av. Insurgentes Sur", "Av. Reforma", "Av. Juárez", "Calle Madero",
            "Av. Revolución", "Calle Hidalgo", "Calle Morelos", "Av. Universidad",
            "Calle 5 de Mayo", "Av. Chapultepec", "Calle Zaragoza", "Calle Allende",
            "Av. Vallarta", "Calle Guerrero", "Av. Constitución", "Calle Aldama",
            "Av. Patriotismo", "Calle Matamoros", "Av. Tlalpan", "Calle Independencia",
            "Calle Benito Juárez", "Av. López Mateos", "Calle Niños Héroes", "Calle Colón",
        ]
    }

    fn colonias() -> &'static [&'static str] {
        &[
            "Centro", "Roma Norte", "Condesa", "Del Valle", "Narvarte", "Polanco",
            "Coyoacán", "Juárez", "San Rafael", "Doctores", "Obrera", "Escandón",
            "Napoles", "Portales", "Lindavista", "Providencia", "Americana", "Chapalita",
            "Obispado", "Mitras Centro", "Jardines del Bosque", "La Paz", "Las Águilas",
        ]
    }

    fn cities() -> &'static [(&'static str, &'static str)] {
        &[
            ("Ciudad de México", "CDMX"),
            ("Guadalajara", "Jalisco"),
            ("Zapopan", "Jalisco"),
            ("Monterrey", "Nuevo León"),
            ("San Pedro Garza García", "Nuevo León"),
            ("Puebla", "Puebla"),
            ("Querétaro", "Querétaro"),
            ("Mérida", "Yucatán"),
            ("Toluca", "Estado de México"),
            ("Naucalpan", "Estado de México"),
            ("León", "Guanajuato"),
            ("Tijuana", "Baja California"),
            ("Oaxaca", "Oaxaca"),
            ("Morelia", "Michoacán"),
            ("Cancún", "Quintana Roo"),
        ]
    }
}
