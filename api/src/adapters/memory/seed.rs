//! Sample data for local runs (`SEED_DATA=true`)

use chrono::NaiveDate;

use crate::domain::entities::{Gender, NewCountry, NewPerson};
use crate::domain::ports::{CountryRepository, PersonRepository};
use crate::error::DomainError;

const SAMPLE_COUNTRIES: [&str; 5] = ["USA", "Canada", "UK", "India", "Australia"];

/// (name, email, date of birth, gender, country, address, newsletters)
type SamplePerson = (
    &'static str,
    &'static str,
    (i32, u32, u32),
    Gender,
    &'static str,
    &'static str,
    bool,
);

const SAMPLE_PERSONS: [SamplePerson; 5] = [
    (
        "Marguerite",
        "mwebsdale0@people.com.cn",
        (1989, 8, 28),
        Gender::Female,
        "USA",
        "4 Parkside Point",
        false,
    ),
    (
        "Ursa",
        "ushears1@globo.com",
        (1990, 10, 5),
        Gender::Female,
        "Canada",
        "6 Morningstar Circle",
        false,
    ),
    (
        "Franchot",
        "fbowsher2@howstuffworks.com",
        (1995, 2, 10),
        Gender::Male,
        "UK",
        "73 Heath Avenue",
        true,
    ),
    (
        "Angie",
        "asaltmarshe3@hexun.com",
        (1987, 1, 9),
        Gender::Male,
        "India",
        "83187 Merry Drive",
        true,
    ),
    (
        "Tani",
        "ttregona4@stumbleupon.com",
        (1995, 2, 11),
        Gender::Other,
        "Australia",
        "50467 Holy Cross Crossing",
        false,
    ),
];

/// Populate empty repositories with a few countries and persons
pub async fn seed_sample_data<CR, PR>(countries: &CR, persons: &PR) -> Result<(), DomainError>
where
    CR: CountryRepository,
    PR: PersonRepository,
{
    if !countries.find_all().await?.is_empty() || !persons.find_all().await?.is_empty() {
        tracing::debug!("Store already populated, skipping sample data");
        return Ok(());
    }

    for name in SAMPLE_COUNTRIES {
        countries
            .create(&NewCountry {
                name: name.to_string(),
            })
            .await?;
    }

    for (name, email, (y, m, d), gender, country, address, news) in SAMPLE_PERSONS {
        let country_id = countries.find_by_name(country).await?.map(|c| c.id);
        persons
            .create(&NewPerson {
                name: name.to_string(),
                email: email.to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(y, m, d),
                gender: Some(gender),
                country_id,
                address: Some(address.to_string()),
                receive_news_letters: news,
            })
            .await?;
    }

    tracing::info!(
        countries = SAMPLE_COUNTRIES.len(),
        persons = SAMPLE_PERSONS.len(),
        "Seeded sample data"
    );

    Ok(())
}
