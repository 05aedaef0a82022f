use crate::store::NewAccount;

use super::errors::{filled, FormErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccountField {
    Name,
    Kind,
    Currency,
}

/// Input of the "Add Account" dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountForm {
    pub name: String,
    pub kind: String,
    pub currency: String,
}

impl AccountForm {
    pub fn validate(&self) -> Result<NewAccount, FormErrors<AccountField>> {
        let mut errors = FormErrors::new();
        let name = filled(&self.name);
        let kind = filled(&self.kind);
        let currency = filled(&self.currency);

        if name.is_none() {
            errors.insert(AccountField::Name, "Description is required");
        }
        if kind.is_none() {
            errors.insert(AccountField::Kind, "Account type is required");
        }
        if currency.is_none() {
            errors.insert(AccountField::Currency, "Currency is required");
        }

        errors.into_result(|| NewAccount {
            name: name.unwrap_or_default().to_string(),
            kind: kind.unwrap_or_default().to_string(),
            currency: currency.unwrap_or_default().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_required() {
        let errors = AccountForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(AccountField::Name), Some("Description is required"));
        assert_eq!(errors.get(AccountField::Kind), Some("Account type is required"));
        assert_eq!(errors.get(AccountField::Currency), Some("Currency is required"));
    }

    #[test]
    fn whitespace_only_is_empty() {
        let form = AccountForm {
            name: "   ".into(),
            kind: "Savings".into(),
            currency: "EUR".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(AccountField::Name).is_some());
    }

    #[test]
    fn valid_form_is_trimmed() {
        let form = AccountForm {
            name: " Travel ".into(),
            kind: "Savings".into(),
            currency: "USD".into(),
        };
        let account = form.validate().unwrap();
        assert_eq!(account.name, "Travel");
        assert_eq!(account.currency, "USD");
    }
}
