// Main Menu Module for emptrack
//
// The fixed, ordered list of actions the shell offers. A selection can be
// typed either as the action's number or as its label.

/// Every action the shell can perform, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    UpdateEmployeeManager,
    ViewEmployeesByManager,
    ViewEmployeesByDepartment,
    DeleteDepartment,
    DeleteRole,
    DeleteEmployee,
    ViewDepartmentBudget,
    Quit,
}

impl MenuAction {
    /// All actions in the order they are presented.
    pub const ALL: [MenuAction; 15] = [
        MenuAction::ViewDepartments,
        MenuAction::ViewRoles,
        MenuAction::ViewEmployees,
        MenuAction::AddDepartment,
        MenuAction::AddRole,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::UpdateEmployeeManager,
        MenuAction::ViewEmployeesByManager,
        MenuAction::ViewEmployeesByDepartment,
        MenuAction::DeleteDepartment,
        MenuAction::DeleteRole,
        MenuAction::DeleteEmployee,
        MenuAction::ViewDepartmentBudget,
        MenuAction::Quit,
    ];

    /// The label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewDepartments => "View all departments",
            MenuAction::ViewRoles => "View all roles",
            MenuAction::ViewEmployees => "View all employees",
            MenuAction::AddDepartment => "Add a department",
            MenuAction::AddRole => "Add a role",
            MenuAction::AddEmployee => "Add an employee",
            MenuAction::UpdateEmployeeRole => "Update an employee role",
            MenuAction::UpdateEmployeeManager => "Update an employee manager",
            MenuAction::ViewEmployeesByManager => "View employees by manager",
            MenuAction::ViewEmployeesByDepartment => "View employees by department",
            MenuAction::DeleteDepartment => "Delete a department",
            MenuAction::DeleteRole => "Delete a role",
            MenuAction::DeleteEmployee => "Delete an employee",
            MenuAction::ViewDepartmentBudget => "View the total utilized budget of a department",
            MenuAction::Quit => "Quit",
        }
    }

    /// Resolves a typed selection: a 1-based menu number or a label
    /// (case-insensitive). Returns None for anything else.
    pub fn from_selection(input: &str) -> Option<MenuAction> {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.label().eq_ignore_ascii_case(input))
    }
}

/// Renders the numbered menu with its question.
pub fn render_menu() -> String {
    let mut output = String::from("What would you like to do?\n");
    for (i, action) in MenuAction::ALL.iter().enumerate() {
        output.push_str(&format!("{:>3}) {}\n", i + 1, action.label()));
    }
    output
}
