//! Fixed organizational option lists (unit, group, sector).
//!
//! Each list is a closed enum so an out-of-list value cannot be represented.
//! Labels are the operator-facing strings and are also what the CSV export
//! writes.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! option_list {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every option, in presentation order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// First option of the list.
            pub fn first() -> Self {
                Self::ALL[0]
            }

            /// Position of this option within [`Self::ALL`].
            pub fn index(self) -> usize {
                Self::ALL.iter().position(|option| *option == self).unwrap_or(0)
            }

            /// Option `step` places away from this one, wrapping at both ends.
            pub fn cycle(self, step: isize) -> Self {
                let len = Self::ALL.len() as isize;
                let next = (self.index() as isize + step).rem_euclid(len);
                Self::ALL[next as usize]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

option_list! {
    /// Company unit the collaborator is allocated to.
    Unit {
        Headquarters => "Matriz",
        NorthBranch => "Filial Norte",
        SouthBranch => "Filial Sul",
        DistributionCenter => "Centro de Distribuição",
        PortUnit => "Unidade Portuária",
    }
}

option_list! {
    /// Functional group inside the unit.
    Group {
        Maintenance => "Manutenção",
        Operations => "Operação",
        Engineering => "Engenharia",
        Administrative => "Administrativo",
        Logistics => "Logística",
    }
}

option_list! {
    /// Work sector of the collaborator.
    Sector {
        Electrical => "Elétrica",
        Mechanical => "Mecânica",
        Civil => "Civil",
        Boilermaking => "Caldeiraria",
        Utilities => "Utilidades",
        Warehouse => "Almoxarifado",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_writes_the_label() {
        assert_eq!(Unit::Headquarters.to_string(), "Matriz");
        assert_eq!(format!("{}", Sector::Civil), Sector::Civil.label());
        assert_eq!(Group::first().index(), 0);
    }

    #[test]
    fn cycle_wraps_in_both_directions() {
        assert_eq!(Group::first().cycle(-1), Group::Logistics);
        assert_eq!(Group::Logistics.cycle(1), Group::Maintenance);
        assert_eq!(Sector::Electrical.cycle(2), Sector::Civil);
    }
}
