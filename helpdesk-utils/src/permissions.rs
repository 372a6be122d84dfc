use poise::serenity_prelude as serenity;

/// Whether `granted` satisfies `required`. `ADMINISTRATOR` satisfies anything.
pub fn permits(granted: serenity::Permissions, required: serenity::Permissions) -> bool {
    granted.contains(serenity::Permissions::ADMINISTRATOR) || granted.contains(required)
}

/// Resolve a member's effective guild-level permissions from their roles.
///
/// The guild owner holds every permission.
pub async fn resolve_user_permissions(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
) -> anyhow::Result<serenity::Permissions> {
    let guild = guild_id.to_partial_guild(http).await?;
    if guild.owner_id == user_id {
        return Ok(serenity::Permissions::all());
    }

    let member = guild_id.member(http, user_id).await?;
    let roles = guild_id.roles(http).await?;

    let mut resolved = serenity::Permissions::empty();
    let everyone_role_id = serenity::RoleId::new(guild_id.get());

    for role in roles.values() {
        if role.id == everyone_role_id || member.roles.contains(&role.id) {
            resolved |= role.permissions;
        }
    }

    Ok(resolved)
}

pub async fn has_user_permission(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
    required: serenity::Permissions,
) -> anyhow::Result<bool> {
    if required.is_empty() {
        return Ok(true);
    }

    let perms = resolve_user_permissions(http, guild_id, user_id).await?;
    Ok(permits(perms, required))
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::Permissions;

    use super::permits;

    #[test]
    fn administrator_satisfies_everything() {
        assert!(permits(Permissions::ADMINISTRATOR, Permissions::MANAGE_GUILD));
        assert!(permits(
            Permissions::ADMINISTRATOR,
            Permissions::BAN_MEMBERS | Permissions::KICK_MEMBERS
        ));
    }

    #[test]
    fn every_required_flag_must_be_granted() {
        let granted = Permissions::SEND_MESSAGES | Permissions::KICK_MEMBERS;
        assert!(permits(granted, Permissions::KICK_MEMBERS));
        assert!(permits(granted, Permissions::empty()));
        assert!(!permits(granted, Permissions::MANAGE_GUILD));
        assert!(!permits(granted, Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS));
    }
}
