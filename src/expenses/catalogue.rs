/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::expenses::expense::{Category, PaymentMethod};

/// Display labels and subcategories for each category, keyed the same way
/// the stored documents are.
impl Category {
	pub const ALL: [Category; 5] = [
		Category::Saude,
		Category::Moradia,
		Category::Mercado,
		Category::Transporte,
		Category::Lazer,
	];

	pub fn key(&self) -> &'static str {
		match self {
			Category::Saude => "saude",
			Category::Moradia => "moradia",
			Category::Mercado => "mercado",
			Category::Transporte => "transporte",
			Category::Lazer => "lazer",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Category::Saude => "Saúde",
			Category::Moradia => "Moradia",
			Category::Mercado => "Mercado",
			Category::Transporte => "Transporte",
			Category::Lazer => "Lazer",
		}
	}

	/// (key, label) pairs of the subcategories defined for this category
	pub fn subcategories(&self) -> &'static [(&'static str, &'static str)] {
		match self {
			Category::Saude => &[
				("plano-saude", "Plano de saúde"),
				("remedios", "Remédios"),
				("cuidados-pessoais", "Cuidados Pessoais"),
			],
			Category::Moradia => &[
				("aluguel", "Aluguel"),
				("condominio", "Condomínio"),
				("faxina", "Faxina"),
				("gas", "Gás"),
				("luz", "Luz"),
				("internet", "Internet"),
				("outros", "Outros"),
			],
			Category::Mercado => &[
				("comida", "Comida"),
				("alcool", "Álcool"),
				("outros", "Outros"),
			],
			Category::Transporte => &[
				("uber-99", "99/Uber"),
				("gasolina", "Gasolina"),
				("manutencao", "Manutenção do Carro"),
				("seguro", "Seguro"),
				("taxas", "Taxas"),
			],
			Category::Lazer => &[
				("bar", "Bar"),
				("restaurante", "Restaurante"),
				("show", "Show"),
				("viagem", "Viagem"),
			],
		}
	}

	pub fn subcategory_label(&self, key: &str) -> Option<&'static str> {
		self.subcategories()
			.iter()
			.find(|(k, _)| *k == key)
			.map(|(_, label)| *label)
	}

	pub fn from_key(key: &str) -> Option<Category> {
		Category::ALL.into_iter().find(|c| c.key() == key)
	}
}

impl PaymentMethod {
	pub fn key(&self) -> &'static str {
		match self {
			PaymentMethod::Credit => "credit",
			PaymentMethod::Debit => "debit",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			PaymentMethod::Credit => "Crédito",
			PaymentMethod::Debit => "Débito",
		}
	}

	pub fn from_key(key: &str) -> Option<PaymentMethod> {
		match key {
			"credit" => Some(PaymentMethod::Credit),
			"debit" => Some(PaymentMethod::Debit),
			_ => None,
		}
	}
}
