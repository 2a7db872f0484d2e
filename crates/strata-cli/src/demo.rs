//! The Financial Risk System example workspace.
//!
//! A simple (incomplete) C4 model based on the financial risk system
//! architecture kata.

use strata_core::{InteractionStyle, Location, Result, Taggable};
use strata_graph::Workspace;

pub const TAG_ALERT: &str = "Alert";
pub const TAG_RISK_SYSTEM: &str = "Risk System";

pub fn financial_risk_system() -> Result<Workspace> {
    let mut workspace = Workspace::new(
        "Financial Risk System",
        "This is a simple (incomplete) example C4 model based upon the financial risk \
         system architecture kata, which can be found at http://bit.ly/sa4d-risksystem",
    );
    let model = workspace.model_mut();

    let financial_risk_system = model.add_software_system(
        Location::Internal,
        "Financial Risk System",
        "Calculates the bank's exposure to risk for product X",
    )?;

    let business_user = model.add_person(
        Location::Internal,
        "Business User",
        "A regular business user",
    )?;
    model.uses(business_user, financial_risk_system, "Views reports using")?;

    let configuration_user = model.add_person(
        Location::Internal,
        "Configuration User",
        "A regular business user who can also configure the parameters used in the risk calculations",
    )?;
    model.uses(
        configuration_user,
        financial_risk_system,
        "Configures parameters using",
    )?;

    let trade_data_system = model.add_software_system(
        Location::Internal,
        "Trade Data System",
        "The system of record for trades of type X",
    )?;
    model.uses(financial_risk_system, trade_data_system, "Gets trade data from")?;

    let reference_data_system = model.add_software_system(
        Location::Internal,
        "Reference Data System",
        "Manages reference data for all counterparties the bank interacts with",
    )?;
    model.uses(
        financial_risk_system,
        reference_data_system,
        "Gets counterparty data from",
    )?;

    let email_system = model.add_software_system(
        Location::Internal,
        "E-mail system",
        "Microsoft Exchange",
    )?;
    model.uses(
        financial_risk_system,
        email_system,
        "Sends a notification that a report is ready to",
    )?;
    model.delivers(
        email_system,
        business_user,
        (
            "Sends a notification that a report is ready to",
            "E-mail message",
            InteractionStyle::Asynchronous,
        ),
    )?;

    let central_monitoring_service = model.add_software_system(
        Location::Internal,
        "Central Monitoring Service",
        "The bank-wide monitoring and alerting dashboard",
    )?;
    model
        .uses(
            financial_risk_system,
            central_monitoring_service,
            (
                "Sends critical failure alerts to",
                "SNMP",
                InteractionStyle::Asynchronous,
            ),
        )?
        .add_tags([TAG_ALERT]);

    let active_directory = model.add_software_system(
        Location::Internal,
        "Active Directory",
        "Manages users and security roles across the bank",
    )?;
    model.uses(
        financial_risk_system,
        active_directory,
        "Uses for authentication and authorisation",
    )?;

    if let Some(system) = model.element_mut(financial_risk_system) {
        system.add_tags([TAG_RISK_SYSTEM]);
    }

    Ok(workspace)
}
