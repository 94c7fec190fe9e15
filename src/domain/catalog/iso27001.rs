//! Reference ISO 27001 readiness questionnaire.

use super::{CatalogSection, QuestionCatalog};

const SECTIONS: &[(&str, &[&str])] = &[
    (
        "Management Commitment and Context",
        &[
            "Has top management formally committed to implementing and supporting an Information Security Management System (ISMS)?",
            "Are the organization's objectives for information security clearly defined and aligned with business goals?",
            "Has the scope of the ISMS been clearly documented (including boundaries, exclusions, and context)?",
            "Is there a clear assignment of roles and responsibilities for information security?",
            "Has the organization identified and documented relevant internal and external issues that affect information security?",
            "Are interested parties (stakeholders) and their information security requirements identified and documented?",
        ],
    ),
    (
        "ISMS Policy and Documentation",
        &[
            "Is there a formally documented information security policy approved by management?",
            "Is the policy communicated to all employees and relevant external parties?",
            "Is the policy reviewed and updated regularly?",
            "Are procedures, guidelines, and records documented, accessible, and controlled?",
            "Is there a document control process in place?",
        ],
    ),
    (
        "Risk Assessment and Treatment",
        &[
            "Is there a defined risk assessment methodology?",
            "Are information security risks identified, analyzed, and evaluated regularly?",
            "Are asset inventories (information, hardware, software, people, etc.) maintained?",
            "Are threats and vulnerabilities assessed for each asset?",
            "Is there a risk treatment plan that specifies how risks will be managed (mitigated, avoided, transferred, or accepted)?",
            "Are controls selected based on the results of risk assessment and documented in a Statement of Applicability (SoA)?",
            "Are residual risks reviewed and accepted by management?",
        ],
    ),
    (
        "Information Security Controls (Annex A Reference) - Organizational Controls",
        &[
            "Are roles and responsibilities for information security clearly assigned?",
            "Is there a disciplinary process for security breaches?",
            "Are background checks performed on employees?",
            "Are all users aware of their responsibilities regarding information security?",
        ],
    ),
    (
        "Asset Management",
        &[
            "Is there an up-to-date inventory of all information assets?",
            "Are ownership and classification of information assets defined?",
            "Are processes in place for the acceptable use and disposal of assets?",
        ],
    ),
    (
        "Access Control",
        &[
            "Are user access rights granted based on business need and reviewed regularly?",
            "Are authentication mechanisms (passwords, MFA, etc.) enforced?",
            "Is there a process for user registration, de-registration, and privilege management?",
        ],
    ),
    (
        "Cryptography",
        &[
            "Are encryption policies and practices documented and followed?",
            "Are cryptographic keys securely managed?",
        ],
    ),
    (
        "Physical and Environmental Security",
        &[
            "Are physical entry controls in place to secure information processing facilities?",
            "Are equipment and media protected from unauthorized access and environmental threats?",
        ],
    ),
    (
        "Operations Security",
        &[
            "Are operating procedures documented and communicated?",
            "Are system logs collected, monitored, and protected?",
            "Is malware protection implemented and updated?",
            "Are backup processes in place and tested regularly?",
        ],
    ),
    (
        "Communications Security",
        &[
            "Are networks managed and protected?",
            "Is information transferred securely both internally and externally?",
        ],
    ),
    (
        "System Acquisition, Development, and Maintenance",
        &[
            "Is information security integrated into project management and system development?",
            "Are vulnerabilities in software and systems identified and addressed?",
        ],
    ),
    (
        "Supplier Relationships",
        &[
            "Are suppliers evaluated for their information security practices?",
            "Are information security requirements included in supplier agreements?",
        ],
    ),
    (
        "Information Security Incident Management",
        &[
            "Is there an incident management policy and procedure?",
            "Are incidents reported, recorded, and investigated promptly?",
            "Are lessons learned from incidents used to improve controls?",
        ],
    ),
    (
        "Business Continuity",
        &[
            "Are information security aspects considered in business continuity planning?",
            "Are continuity and recovery plans tested and reviewed?",
        ],
    ),
    (
        "Compliance",
        &[
            "Are legal, regulatory, and contractual requirements identified and documented?",
            "Are regular reviews conducted to ensure compliance with relevant laws and standards?",
            "Are records of processing activities maintained as required by privacy/data protection regulations?",
        ],
    ),
    (
        "Monitoring and Measurement",
        &[
            "Are controls regularly monitored and measured for effectiveness?",
            "Are internal audits of the ISMS performed according to a planned schedule?",
            "Is there a management review process for the ISMS?",
            "Are corrective and preventive actions taken to address non-conformities?",
        ],
    ),
    (
        "Continual Improvement",
        &[
            "Is there a formal process for continual improvement of the ISMS?",
            "Are improvement opportunities identified through monitoring, audits, incidents, and feedback?",
            "Are changes to the ISMS documented and communicated?",
        ],
    ),
];

/// Builds the ISO 27001 readiness catalog (17 sections, 57 questions).
pub fn iso27001_catalog() -> QuestionCatalog {
    QuestionCatalog::new(
        SECTIONS
            .iter()
            .map(|(section, items)| CatalogSection::new(*section, items.iter().copied()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_catalog_has_17_sections_and_57_questions() {
        let catalog = iso27001_catalog();
        assert_eq!(catalog.sections().len(), 17);
        assert_eq!(catalog.len(), 57);
        assert_eq!(catalog.items().len(), 57);
    }

    #[test]
    fn reference_catalog_starts_and_ends_where_expected() {
        let items = iso27001_catalog().items();
        assert_eq!(items[0].section, "Management Commitment and Context");
        assert_eq!(items[56].section, "Continual Improvement");
        assert_eq!(
            items[56].question,
            "Are changes to the ISMS documented and communicated?"
        );
    }

    #[test]
    fn no_section_is_empty() {
        assert!(iso27001_catalog()
            .sections()
            .iter()
            .all(|s| !s.items.is_empty()));
    }
}
